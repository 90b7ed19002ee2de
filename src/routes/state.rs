//! Lifx api routes for power and state changes

use crate::{
    models::{ColorSpec, Payload, PowerMode, Selector},
    routes::{Action, ActionRequest},
    Error, Result,
};

fn check_duration(duration: Option<f64>) -> Result<()> {
    match duration {
        Some(d) if !(d >= 0.0) => Err(Error::out_of_range("duration", d, ">= 0")),
        _ => Ok(()),
    }
}

/// Turn lights on or off
///
/// # Path
///   `PUT /v1/lights/{selector}/state`
///
/// # Body
///   `power`, `duration` if given
///
/// # Examples
///
/// ```
/// use lifx::models::{PowerMode, Selector};
/// use lifx::routes::{state, HttpMethod};
///
/// let req = state::power(Selector::All, PowerMode::Off, None).unwrap();
/// assert_eq!(req.method(), HttpMethod::Put);
/// assert_eq!(
///     serde_json::to_value(req.payload()).unwrap(),
///     serde_json::json!({"power": "off"}),
/// );
/// ```
///
pub fn power(selector: Selector, power: PowerMode, duration: Option<f64>) -> Result<ActionRequest> {
    check_duration(duration)?;
    let mut payload = Payload::new();
    payload.power(power);
    if let Some(duration) = duration {
        payload.duration(duration);
    }
    Ok(ActionRequest::new(selector, Action::State, payload))
}

/// Set power and color in one go
///
/// # Path
///   `PUT /v1/lights/{selector}/state`
///
/// # Body
///   `power`, `color`, `duration`, each only if given
///
pub fn state(
    selector: Selector,
    power: Option<PowerMode>,
    color: &ColorSpec,
    duration: Option<f64>,
) -> Result<ActionRequest> {
    check_duration(duration)?;
    let mut payload = Payload::new();
    if let Some(power) = power {
        payload.power(power);
    }
    if let Some(color) = color.encode()? {
        payload.color(color);
    }
    if let Some(duration) = duration {
        payload.duration(duration);
    }
    Ok(ActionRequest::new(selector, Action::State, payload))
}

/// Flip the power of each selected light
///
/// # Path
///   `POST /v1/lights/{selector}/toggle`
///
/// # Body
///   `duration` if given
///
/// # Examples
///
/// ```
/// use lifx::models::Selector;
/// use lifx::routes::{state, HttpMethod};
///
/// let req = state::toggle(Selector::Group("den".into()), None).unwrap();
/// assert_eq!(req.method(), HttpMethod::Post);
/// assert!(req.payload().is_empty());
/// ```
///
pub fn toggle(selector: Selector, duration: Option<f64>) -> Result<ActionRequest> {
    check_duration(duration)?;
    let mut payload = Payload::new();
    if let Some(duration) = duration {
        payload.duration(duration);
    }
    Ok(ActionRequest::new(selector, Action::Toggle, payload))
}
