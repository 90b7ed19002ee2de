//! Lifx api routes, one request builder per action

use std::fmt;

use strum_macros::Display;

use crate::models::{Payload, Selector};

pub mod effects;
pub mod lights;
pub mod state;

/// HTTP verbs used by the api
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
}

/// Sub-resource of a selector that an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    State,
    Toggle,
    Pulse,
    Breathe,
    List,
}

impl Action {
    /// Path segment appended after the selector
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx::routes::Action;
    ///
    /// assert_eq!(Action::State.path(), "state");
    /// assert_eq!(Action::Breathe.path(), "effects/breathe");
    /// assert_eq!(Action::List.path(), "");
    /// ```
    ///
    pub fn path(&self) -> &'static str {
        match self {
            Action::State => "state",
            Action::Toggle => "toggle",
            Action::Pulse => "effects/pulse",
            Action::Breathe => "effects/breathe",
            Action::List => "",
        }
    }

    /// HTTP verb the api expects for this action
    pub fn method(&self) -> HttpMethod {
        match self {
            Action::State => HttpMethod::Put,
            Action::Toggle | Action::Pulse | Action::Breathe => HttpMethod::Post,
            Action::List => HttpMethod::Get,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::List => write!(f, "list"),
            other => write!(f, "{}", other.path()),
        }
    }
}

/// A fully built request, ready for the transport
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    selector: Selector,
    action: Action,
    payload: Payload,
}

impl ActionRequest {
    /// Create a request for the action on the selected lights
    pub fn new(selector: Selector, action: Action, payload: Payload) -> Self {
        ActionRequest {
            selector,
            action,
            payload,
        }
    }

    /// Accessor for the HTTP verb
    pub fn method(&self) -> HttpMethod {
        self.action.method()
    }

    /// Accessor for the target lights
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Accessor for the action
    pub fn action(&self) -> Action {
        self.action
    }

    /// Accessor for the body fields
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Target url below the given api base url
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx::models::{Payload, Selector};
    /// use lifx::routes::{Action, ActionRequest};
    ///
    /// let base = "https://api.lifx.com/v1";
    ///
    /// let req = ActionRequest::new(Selector::Label("desk".into()), Action::Pulse, Payload::new());
    /// assert_eq!(req.url(base), "https://api.lifx.com/v1/lights/label:desk/effects/pulse");
    ///
    /// let req = ActionRequest::new(Selector::All, Action::List, Payload::new());
    /// assert_eq!(req.url(base), "https://api.lifx.com/v1/lights/all");
    ///
    /// let label = Selector::Label("Kitchen #2".into());
    /// let req = ActionRequest::new(label, Action::State, Payload::new());
    /// assert_eq!(req.url(base), "https://api.lifx.com/v1/lights/label:Kitchen%20%232/state");
    /// ```
    ///
    pub fn url(&self, base: &str) -> String {
        match self.action {
            Action::List => format!("{}/lights/{}", base, self.selector.path_segment()),
            action => format!(
                "{}/lights/{}/{}",
                base,
                self.selector.path_segment(),
                action.path()
            ),
        }
    }
}
