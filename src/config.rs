//! Environment driven settings

use std::{env, path::PathBuf, time::Duration};

use log::warn;

use crate::{Error, Result};

/// Default base url of the lifx http api
pub const API_URL: &str = "https://api.lifx.com/v1";

/// Default connect and read timeout
pub const TIMEOUT: Duration = Duration::from_secs(3);

/// Name of the token file inside the config directory
pub const TOKEN_FILE: &str = "lifx_token";

/// Runtime settings for one invocation
///
/// # Examples
///
/// ```
/// use lifx::Config;
///
/// let config = Config::default();
/// assert_eq!(config.api_url(), "https://api.lifx.com/v1");
/// assert_eq!(config.timeout().as_secs(), 3);
/// ```
///
#[derive(Debug, Clone)]
pub struct Config {
    api_url: String,
    config_path: Option<PathBuf>,
    timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: API_URL.to_string(),
            config_path: None,
            timeout: TIMEOUT,
        }
    }
}

impl Config {
    /// Read `LIFX_API_URL`, `LIFX_CONFIG_PATH` and `LIFX_TIMEOUT`
    ///
    /// Unset variables keep their defaults, unparsable ones are
    /// logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(url) = env::var("LIFX_API_URL") {
            config = config.with_api_url(&url);
        }

        if let Ok(path) = env::var("LIFX_CONFIG_PATH") {
            config = config.with_config_path(PathBuf::from(path));
        }

        if let Ok(secs) = env::var("LIFX_TIMEOUT") {
            match secs.parse::<f64>() {
                Ok(v) if v > 0.0 && v.is_finite() => {
                    config = config.with_timeout(Duration::from_secs_f64(v));
                }
                _ => warn!("Invalid LIFX_TIMEOUT: {secs}"),
            }
        }

        config
    }

    /// Use another api base url, trailing slashes are dropped
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Keep the token file in the given directory
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Use another request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Accessor for the api base url
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Accessor for the request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full path of the token file
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use lifx::Config;
    ///
    /// let config = Config::default().with_config_path(PathBuf::from("/tmp/lifx"));
    /// assert_eq!(config.token_path().unwrap(), PathBuf::from("/tmp/lifx/lifx_token"));
    /// ```
    ///
    pub fn token_path(&self) -> Result<PathBuf> {
        let dir = match &self.config_path {
            Some(path) => path.clone(),
            None => dirs::config_dir().ok_or(Error::NoConfigDir)?.join("lifx"),
        };
        Ok(dir.join(TOKEN_FILE))
    }
}
