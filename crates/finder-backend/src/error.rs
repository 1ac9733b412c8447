//! Error type for `finder-backend`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("missing required environment variable {0}")]
  MissingEnv(&'static str),

  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  /// A non-success response whose body carried a message. The message is
  /// surfaced to the user verbatim, so `Display` is the message alone.
  #[error("{message}")]
  Api { status: u16, message: String },

  /// A non-success response with no usable message in the body.
  #[error("request failed with status {0}")]
  Status(u16),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
