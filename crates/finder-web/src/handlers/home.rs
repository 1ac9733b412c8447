//! Handler for the landing page.

use axum::{extract::State, response::Html};
use finder_core::{
  store::{AuthBackend, ProviderStore},
  worker::CITIES,
};
use minijinja::context;

use crate::{AppState, Error, handlers::render};

/// `GET /`
pub async fn page<S>(State(state): State<AppState<S>>) -> Result<Html<String>, Error>
where
  S: ProviderStore + AuthBackend + 'static,
{
  render(&state, "home.html", context! { cities => CITIES })
}
