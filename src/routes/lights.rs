//! Lifx api route for listing lights

use crate::{
    models::{Payload, Selector},
    routes::{Action, ActionRequest},
};

/// List the selected lights and their current state
///
/// # Path
///   `GET /v1/lights/{selector}`
///
/// # Responses
///   - `200`: [Vec] of [crate::models::Light]
///
/// # Examples
///
/// ```
/// use lifx::models::Selector;
/// use lifx::routes::{lights, HttpMethod};
///
/// let req = lights::list(Selector::Location("home".into()));
/// assert_eq!(req.method(), HttpMethod::Get);
/// assert_eq!(req.url("https://api.lifx.com/v1"), "https://api.lifx.com/v1/lights/location:home");
/// assert!(req.payload().is_empty());
/// ```
///
pub fn list(selector: Selector) -> ActionRequest {
    ActionRequest::new(selector, Action::List, Payload::new())
}
