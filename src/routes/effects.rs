//! Lifx api routes for animated effects

use crate::{
    models::{EffectParams, Payload, Selector},
    routes::{Action, ActionRequest},
    Result,
};

fn effect(selector: Selector, action: Action, params: &EffectParams) -> Result<ActionRequest> {
    params.validate()?;
    let mut payload = Payload::new();
    payload.effect(params)?;
    Ok(ActionRequest::new(selector, action, payload))
}

/// Quickly flash between the current (or from) color and the given color
///
/// # Path
///   `POST /v1/lights/{selector}/effects/pulse`
///
/// # Body
///   `period`, `cycles`, `peak`, `persist`, `power_on`, and `color`,
///   `from_color` if given
///
/// # Examples
///
/// ```
/// use lifx::models::{EffectParams, Selector};
/// use lifx::routes::{effects, HttpMethod};
///
/// let req = effects::pulse(Selector::All, &EffectParams::default()).unwrap();
/// assert_eq!(req.method(), HttpMethod::Post);
/// assert_eq!(req.url("https://api.lifx.com/v1"), "https://api.lifx.com/v1/lights/all/effects/pulse");
/// ```
///
pub fn pulse(selector: Selector, params: &EffectParams) -> Result<ActionRequest> {
    effect(selector, Action::Pulse, params)
}

/// Slowly fade between the current (or from) color and the given color
///
/// # Path
///   `POST /v1/lights/{selector}/effects/breathe`
///
/// # Body
///   same as [pulse]
///
pub fn breathe(selector: Selector, params: &EffectParams) -> Result<ActionRequest> {
    effect(selector, Action::Breathe, params)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{ColorSpec, ColorValue, NamedColor, Rgb};
    use crate::Error;

    #[test]
    fn breathe_with_both_colors() {
        let params = EffectParams {
            period: 2.5,
            cycles: 4.0,
            peak: 0.2,
            persist: true,
            power_on: false,
            color: ColorSpec {
                rgb: Some(Rgb::new(10, 20, 30)),
                ..Default::default()
            },
            from_color: ColorSpec {
                color: Some(ColorValue::Hex("#000000".into())),
                brightness: Some(0.1),
                ..Default::default()
            },
        };
        let req = breathe(Selector::Group("hall".into()), &params).unwrap();

        assert_eq!(req.action(), Action::Breathe);
        assert_eq!(
            req.url("https://api.lifx.com/v1"),
            "https://api.lifx.com/v1/lights/group:hall/effects/breathe"
        );
        assert_eq!(
            serde_json::to_value(req.payload()).unwrap(),
            json!({
                "period": "2.5",
                "cycles": "4",
                "peak": "0.2",
                "persist": true,
                "power_on": false,
                "color": "rgb:10,20,30",
                "from_color": "#000000 brightness:0.1",
            })
        );
    }

    #[test]
    fn pulse_defaults_have_no_colors() {
        let req = pulse(Selector::All, &EffectParams::default()).unwrap();
        assert_eq!(
            serde_json::to_value(req.payload()).unwrap(),
            json!({
                "period": "1",
                "cycles": "1",
                "peak": "0.5",
                "persist": false,
                "power_on": true,
            })
        );
    }

    #[test]
    fn pulse_rejects_bad_peak() {
        let params = EffectParams {
            peak: 2.0,
            ..Default::default()
        };
        let err = pulse(Selector::All, &params).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { field: "peak", .. }));
    }

    #[test]
    fn pulse_rejects_conflicting_from_color() {
        let params = EffectParams {
            from_color: ColorSpec {
                color: Some(ColorValue::Named(NamedColor::Cyan)),
                rgb: Some(Rgb::new(0, 255, 255)),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(pulse(Selector::All, &params).unwrap_err(), Error::ConflictingColor);
    }
}
