//! Lifx errors

use std::fmt;

/// All potential errors in lifx
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// More than one of label, group or location was given
    #[error("only one of --label, --group or --location may be given")]
    ConflictingSelectors,

    /// Both a named/hex color and an rgb triple were given
    #[error("a color name or hex value and an rgb value are mutually exclusive")]
    ConflictingColor,

    /// Not one of the known color names, and not a `#RRGGBB` hex value
    #[error("invalid color: {0} (expected a color name or #RRGGBB)")]
    InvalidColor(String),

    /// A numeric parameter outside of its accepted range
    #[error("{field} must be {range}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        range: &'static str,
    },

    /// No token stored, and we are unable to prompt for one
    #[error("no personal access token found, set LIFX_TOKEN or run interactively")]
    MissingToken,

    /// The token can't be used in an HTTP header
    #[error("invalid personal access token")]
    InvalidToken,

    /// A non-success reply from the lifx api
    #[error("{kind}\n{detail}")]
    Api { kind: ApiErrorKind, detail: String },

    /// The request did not complete within the configured timeout
    #[error("request timed out: {0}")]
    Timeout(reqwest::Error),

    /// Any other failure to talk to the api
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    /// Failed to decode a successful reply body
    #[error("failed to decode server response: {err}\nServer response:\n{body}")]
    Decode {
        body: String,
        err: serde_json::Error,
    },

    /// Reading or writing the token file failed
    #[error("token file {action} error: {err}")]
    Credential { action: String, err: std::io::Error },

    /// No per-user configuration directory on this platform
    #[error("unable to locate a configuration directory, set LIFX_CONFIG_PATH")]
    NoConfigDir,

    /// Interactive token prompt failed
    #[error("failed to read token: {0}")]
    Prompt(dialoguer::Error),
}

impl Error {
    /// Create a new token file error
    pub fn credential(action: &str, err: std::io::Error) -> Self {
        Error::Credential {
            action: action.to_string(),
            err,
        }
    }

    /// Create a new out of range error
    pub fn out_of_range(field: &'static str, value: f64, range: &'static str) -> Self {
        Error::OutOfRange {
            field,
            value,
            range,
        }
    }

    /// Sort a transport failure into [Error::Timeout] or [Error::Transport]
    pub fn transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err)
        } else {
            Error::Transport(err)
        }
    }

    /// True when the error was caught before any request was sent
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::ConflictingSelectors
                | Error::ConflictingColor
                | Error::InvalidColor(_)
                | Error::OutOfRange { .. }
                | Error::MissingToken
                | Error::InvalidToken
        )
    }

    /// Process exit status for this error
    ///
    /// Every handled error exits with 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Classification of a non-success HTTP status from the api
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 401, stale or invalid token
    Unauthorized,

    /// 408, the light did not answer the cloud in time
    Unreachable,

    /// 422, missing or malformed parameters
    Unprocessable,

    /// 429, rate limited
    RateLimited,

    /// 500, 502, 503 or 523
    Server(u16),

    /// Anything else that isn't a success
    Unknown(u16),
}

impl ApiErrorKind {
    /// Classify an HTTP status code
    ///
    /// # Returns
    ///   [None] for the success codes (200, 201, 202 and 207)
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx::ApiErrorKind;
    ///
    /// assert_eq!(ApiErrorKind::from_status(207), None);
    /// assert_eq!(ApiErrorKind::from_status(401), Some(ApiErrorKind::Unauthorized));
    /// assert_eq!(ApiErrorKind::from_status(523), Some(ApiErrorKind::Server(523)));
    /// assert_eq!(ApiErrorKind::from_status(204), Some(ApiErrorKind::Unknown(204)));
    /// ```
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200 | 201 | 202 | 207 => None,
            401 => Some(ApiErrorKind::Unauthorized),
            408 => Some(ApiErrorKind::Unreachable),
            422 => Some(ApiErrorKind::Unprocessable),
            429 => Some(ApiErrorKind::RateLimited),
            500 | 502 | 503 | 523 => Some(ApiErrorKind::Server(status)),
            other => Some(ApiErrorKind::Unknown(other)),
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Unauthorized => write!(f, "Unauthorized request - verify your lifx token"),
            ApiErrorKind::Unreachable => write!(f, "Request timed out - light unreachable!"),
            ApiErrorKind::Unprocessable => {
                write!(f, "Unprocessable entity - missing or malformed parameters")
            }
            ApiErrorKind::RateLimited => write!(f, "Too many requests!"),
            ApiErrorKind::Server(code) => write!(f, "Server error! HTTP code: {code}"),
            ApiErrorKind::Unknown(code) => write!(f, "Unknown error! HTTP code: {code}"),
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
