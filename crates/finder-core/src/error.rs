//! Error types for `finder-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown service type: {0:?}")]
  UnknownServiceType(String),

  #[error("experience cannot be negative (got {0})")]
  NegativeExperience(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
