//! Backend connection settings, supplied by the environment.

use crate::{Error, Result};

/// Name of the variable holding the backend's base URL.
pub const URL_VAR: &str = "FINDER_BACKEND_URL";

/// Name of the variable holding the backend's public API key.
pub const KEY_VAR: &str = "FINDER_BACKEND_KEY";

/// Where the backend lives and the public key that identifies this app.
#[derive(Debug, Clone)]
pub struct BackendConfig {
  pub url: String,
  pub key: String,
}

impl BackendConfig {
  /// Read both values from the environment.
  ///
  /// Absence of either is an error; callers treat it as fatal at startup.
  pub fn from_env() -> Result<Self> {
    let url = std::env::var(URL_VAR).map_err(|_| Error::MissingEnv(URL_VAR))?;
    let key = std::env::var(KEY_VAR).map_err(|_| Error::MissingEnv(KEY_VAR))?;
    Ok(Self { url, key })
  }
}
