//! Handlers for the sign-in view.

use axum::{
  Form,
  extract::State,
  response::{IntoResponse, Redirect, Response},
};
use finder_core::store::{AuthBackend, ProviderStore};
use minijinja::context;
use serde::Deserialize;

use crate::{AppState, Error, handlers::render};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
  pub email:    String,
  pub password: String,
}

/// `GET /login`
pub async fn page<S>(State(state): State<AppState<S>>) -> Result<Response, Error>
where
  S: ProviderStore + AuthBackend + 'static,
{
  if state.session.is_authenticated() {
    return Ok(Redirect::to("/dashboard").into_response());
  }
  Ok(render(&state, "login.html", context! { email => "" })?.into_response())
}

/// `POST /login`
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<LoginForm>,
) -> Result<Response, Error>
where
  S: ProviderStore + AuthBackend + 'static,
{
  match state.backend.sign_in(&form.email, &form.password).await {
    Ok(session) => {
      state.session.set(Some(session));
      state.flash.success("Welcome back!", "You are now signed in.");
      Ok(Redirect::to("/dashboard").into_response())
    }
    Err(e) => {
      state.flash.error("Error", e.to_string());
      Ok(render(&state, "login.html", context! { email => form.email })?.into_response())
    }
  }
}

/// `POST /logout`
pub async fn logout<S>(State(state): State<AppState<S>>) -> Result<Response, Error>
where
  S: ProviderStore + AuthBackend + 'static,
{
  if let Err(e) = state.backend.sign_out().await {
    tracing::warn!(error = %e, "backend sign-out failed");
  }
  state.session.set(None);
  Ok(Redirect::to("/").into_response())
}
