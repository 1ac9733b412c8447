//! Error type and axum `IntoResponse` implementation.
//!
//! Almost every failure in this crate is converted to a flash notification
//! at the call site; what remains here is the handful of failures no view
//! can recover from.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("template error: {0}")]
  Template(#[from] minijinja::Error),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    tracing::error!(error = %self, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
  }
}
