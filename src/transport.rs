//! Blocking HTTP transport to the lifx api

use log::debug;
use reqwest::{
    blocking,
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
};
use secrecy::ExposeSecret;

use crate::{
    credential::Token,
    response::ApiResponse,
    routes::{ActionRequest, HttpMethod},
    Config, Error, Result,
};

/// Sends one request per call, with bearer auth and short timeouts
///
/// Any HTTP status is returned as an [ApiResponse], interpreting it is
/// left to [crate::response::check]. Nothing is retried.
///
/// # Examples
///
/// ```
/// use lifx::{Client, Config, Token};
///
/// let token = Token::new("c0ffee").unwrap();
/// let client = Client::new(&token, &Config::default()).unwrap();
/// assert_eq!(client.api_url(), "https://api.lifx.com/v1");
/// ```
///
pub struct Client {
    http: blocking::Client,
    api_url: String,
}

impl Client {
    /// Create a client for the configured api
    pub fn new(token: &Token, config: &Config) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| Error::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = blocking::Client::builder()
            .connect_timeout(config.timeout())
            .timeout(config.timeout())
            .user_agent(concat!("lifx/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(Error::Transport)?;

        Ok(Client {
            http,
            api_url: config.api_url().to_string(),
        })
    }

    /// Accessor for the api base url
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Perform the request and collect the status and body
    pub fn send(&self, req: &ActionRequest) -> Result<ApiResponse> {
        let url = req.url(&self.api_url);
        debug!("{} {}", req.method(), url);

        let builder = match req.method() {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Put => self.http.put(&url).form(req.payload()),
            HttpMethod::Post => self.http.post(&url).form(req.payload()),
        };

        let resp = builder.send().map_err(Error::transport)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(Error::transport)?;
        debug!("{} replied {} ({} bytes)", url, status, body.len());

        Ok(ApiResponse::new(status, body.to_vec()))
    }
}
