//! Personal access token storage and lookup

use std::{
    fs,
    io::{self, IsTerminal, Write},
    path::{Path, PathBuf},
};

use log::{debug, warn};
use secrecy::{ExposeSecret, SecretString};

use crate::{Config, Error, Result};

/// Personal access token used as the bearer credential
///
/// The value is zeroized on drop and redacted from [std::fmt::Debug]
/// output, read it through [ExposeSecret].
///
/// # Examples
///
/// ```
/// use lifx::Token;
/// use secrecy::ExposeSecret;
///
/// let token = Token::new("  c0ffee\n").unwrap();
/// assert_eq!(token.expose_secret(), "c0ffee");
///
/// let debug = format!("{:?}", token);
/// assert!(debug.contains("REDACTED"));
/// assert!(!debug.contains("c0ffee"));
///
/// assert!(Token::new(" ").is_err());
/// ```
///
#[derive(Debug)]
pub struct Token(SecretString);

impl Token {
    /// Create a token from user input, surrounding whitespace is dropped
    pub fn new(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            Err(Error::InvalidToken)
        } else {
            Ok(Token(SecretString::from(value.to_string())))
        }
    }
}

impl ExposeSecret<str> for Token {
    fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Reads and writes the plain text token file
///
/// # Examples
///
/// ```
/// use lifx::{CredentialStore, Token};
/// use secrecy::ExposeSecret;
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = CredentialStore::new(dir.path().join("lifx").join("lifx_token"));
/// assert!(store.load().unwrap().is_none());
///
/// store.save(&Token::new("abc123").unwrap()).unwrap();
/// assert_eq!(store.load().unwrap().unwrap().expose_secret(), "abc123");
/// ```
///
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store for the token file at `path`
    pub fn new(path: PathBuf) -> Self {
        CredentialStore { path }
    }

    /// Create a store at the configured token path
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(CredentialStore::new(config.token_path()?))
    }

    /// Accessor for the token file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token
    ///
    /// # Returns
    ///   [None] if there is no token file, or it is empty
    ///
    pub fn load(&self) -> Result<Option<Token>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => match Token::new(&content) {
                Ok(token) => Ok(Some(token)),
                Err(_) => {
                    warn!("Ignoring empty token file: {}", self.path.display());
                    Ok(None)
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::credential("read", e)),
        }
    }

    /// Write the token, creating the parent directory if needed
    ///
    /// On unix the file is created owner-only before anything is written.
    pub fn save(&self, token: &Token) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::credential("create_dir", e))?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options
            .open(&self.path)
            .map_err(|e| Error::credential("open", e))?;

        // mode only applies on create, tighten a pre-existing file too
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(|e| Error::credential("set_permissions", e))?;
        }

        file.write_all(token.expose_secret().as_bytes())
            .map_err(|e| Error::credential("write", e))?;

        debug!("Stored token in {}", self.path.display());
        Ok(())
    }
}

/// Find the token for this invocation
///
/// An explicit token (flag or `LIFX_TOKEN`) wins and is not persisted.
/// Otherwise the token file is read, and on first run the user is asked
/// to paste a token, which is then stored.
///
/// # Returns
///   [Error::MissingToken] when there is no token and stdin is not a terminal
///
pub fn resolve(explicit: Option<&str>, config: &Config) -> Result<Token> {
    if let Some(value) = explicit {
        return Token::new(value);
    }

    let store = CredentialStore::from_config(config)?;
    if let Some(token) = store.load()? {
        return Ok(token);
    }

    if !io::stdin().is_terminal() {
        return Err(Error::MissingToken);
    }

    let token = prompt()?;
    store.save(&token)?;
    Ok(token)
}

fn prompt() -> Result<Token> {
    eprintln!("No personal access token found!");
    eprintln!("  1. Get your developer lifx token:");
    eprintln!("     https://cloud.lifx.com/settings");
    let value = dialoguer::Password::new()
        .with_prompt("  2. Paste it here")
        .interact()
        .map_err(Error::Prompt)?;
    Token::new(&value)
}
