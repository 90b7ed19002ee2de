//! Lifx - LIFX cloud API client
//!
//! Maps light selectors, colors and effects onto requests against the
//! LIFX HTTP API (`https://api.lifx.com/v1`) and interprets the replies.
//!
//! # Examples
//!
//! ```
//! use lifx::models::{ColorSpec, ColorValue, NamedColor, PowerMode, Selector};
//! use lifx::routes::{state, HttpMethod};
//!
//! let selector = Selector::from_flags(Some("kitchen"), None, None).unwrap();
//! let color = ColorSpec {
//!     color: Some(ColorValue::Named(NamedColor::Red)),
//!     brightness: Some(0.5),
//!     ..Default::default()
//! };
//!
//! let req = state::state(selector, Some(PowerMode::On), &color, Some(2.5)).unwrap();
//! assert_eq!(req.method(), HttpMethod::Put);
//! assert_eq!(
//!     req.url("https://api.lifx.com/v1"),
//!     "https://api.lifx.com/v1/lights/label:kitchen/state"
//! );
//! assert_eq!(
//!     serde_json::to_value(req.payload()).unwrap(),
//!     serde_json::json!({"power": "on", "color": "red brightness:0.5", "duration": "2.5"}),
//! );
//! ```
//!
//! Sending it needs a [Token] and a [Client]:
//!
//! ```no_run
//! use lifx::{response, routes::lights, Client, Config, Token};
//! use lifx::models::Selector;
//!
//! let config = Config::from_env();
//! let token = Token::new("your-personal-access-token")?;
//! let client = Client::new(&token, &config)?;
//!
//! let resp = response::check(client.send(&lights::list(Selector::All))?)?;
//! for light in response::lights(&resp)? {
//!     println!("{} is {}", light.label, light.power);
//! }
//! # Ok::<(), lifx::Error>(())
//! ```
//!
//! # CLI
//!
//! ```bash
//! $ lifx --help
//! Command line interface for LIFX light bulbs
//!
//! Usage: lifx [OPTIONS] [COMMAND]
//!
//! Commands:
//!   on       Turn lights on
//!   off      Turn lights off
//!   state    Set power and color
//!   toggle   Toggle the power of lights
//!   pulse    Flash between two colors
//!   breathe  Fade between two colors
//!   list     List lights and their state
//!   colors   List the known color names
//!   help     Print this message or the help of the given subcommand(s)
//!
//! Options:
//!   -t, --token <TOKEN>  Personal access token, overrides the stored one [env: LIFX_TOKEN]
//!   -h, --help           Print help
//!   -V, --version        Print version
//! ```
//!

pub mod models;
pub mod output;
pub mod response;
pub mod routes;

mod config;
mod credential;
mod errors;
mod transport;

pub use config::Config;
pub use credential::{resolve as resolve_token, CredentialStore, Token};
pub use errors::{ApiErrorKind, Error};
pub use transport::Client;

/// Result alias used throughout lifx
pub type Result<T> = std::result::Result<T, Error>;
