//! Interpretation of api replies

use std::borrow::Cow;

use log::debug;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    models::{ActionResults, Light},
    ApiErrorKind, Error, Result,
};

/// Raw status and body of one api reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    body: Vec<u8>,
}

impl ApiResponse {
    /// Wrap a status code and body
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        ApiResponse { status, body }
    }

    /// Accessor for the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Accessor for the raw body
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, invalid UTF-8 is replaced rather than rejected
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as JSON
    ///
    /// # Returns
    ///   [Error::Decode] carrying the raw body on failure
    ///
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|err| Error::Decode {
            body: self.text().into_owned(),
            err,
        })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Pull a human readable message out of an error body
///
/// Uses the `error` field of a JSON body when there is one, and the raw
/// body text otherwise. Never fails.
///
/// # Examples
///
/// ```
/// use lifx::response::error_detail;
///
/// assert_eq!(error_detail(br#"{"error": "Invalid token"}"#), "Invalid token");
/// assert_eq!(error_detail(br#"{"errors": []}"#), r#"{"errors": []}"#);
/// assert_eq!(error_detail(b"<html>Bad Gateway</html>"), "<html>Bad Gateway</html>");
/// ```
///
pub fn error_detail(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: Some(message),
        }) if !message.is_empty() => message,
        Ok(_) => String::from_utf8_lossy(body).into_owned(),
        Err(e) => {
            debug!("error body is not json: {e}");
            String::from_utf8_lossy(body).into_owned()
        }
    }
}

/// Pass successful replies through, turn everything else into [Error::Api]
///
/// # Examples
///
/// ```
/// use lifx::response::{check, ApiResponse};
/// use lifx::{ApiErrorKind, Error};
///
/// let ok = ApiResponse::new(207, b"{}".to_vec());
/// assert!(check(ok).is_ok());
///
/// let denied = ApiResponse::new(401, br#"{"error": "Invalid token"}"#.to_vec());
/// match check(denied) {
///     Err(Error::Api { kind, detail }) => {
///         assert_eq!(kind, ApiErrorKind::Unauthorized);
///         assert_eq!(detail, "Invalid token");
///     }
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
///
pub fn check(resp: ApiResponse) -> Result<ApiResponse> {
    match ApiErrorKind::from_status(resp.status) {
        None => Ok(resp),
        Some(kind) => Err(Error::Api {
            kind,
            detail: error_detail(&resp.body),
        }),
    }
}

/// Decode the body of a successful list reply
pub fn lights(resp: &ApiResponse) -> Result<Vec<Light>> {
    resp.json()
}

/// Decode the body of a successful state, toggle or effect reply
pub fn results(resp: &ApiResponse) -> Result<ActionResults> {
    resp.json()
}
