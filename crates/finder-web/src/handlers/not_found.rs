//! Fallback handler for unknown routes.

use axum::{
  extract::State,
  http::{StatusCode, Uri},
  response::Html,
};
use finder_core::store::{AuthBackend, ProviderStore};
use minijinja::context;

use crate::{AppState, Error, handlers::render};

/// Any route no other handler claimed.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  uri: Uri,
) -> Result<(StatusCode, Html<String>), Error>
where
  S: ProviderStore + AuthBackend + 'static,
{
  // Diagnostics only; nothing recovers from an unknown path.
  tracing::warn!(path = %uri.path(), "page not found");

  let page = render(&state, "not_found.html", context! { path => uri.path() })?;
  Ok((StatusCode::NOT_FOUND, page))
}
