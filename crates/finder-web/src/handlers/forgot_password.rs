//! Handlers for the password-reset view.
//!
//! The reset mail itself is sent by the backend; this view only collects
//! the address and reports the outcome.

use axum::{Form, extract::State, response::Html};
use finder_core::store::{AuthBackend, ProviderStore};
use minijinja::context;
use serde::Deserialize;

use crate::{AppState, Error, handlers::render};

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordForm {
  pub email: String,
}

/// `GET /forgot-password`
pub async fn page<S>(State(state): State<AppState<S>>) -> Result<Html<String>, Error>
where
  S: ProviderStore + AuthBackend + 'static,
{
  render(&state, "forgot_password.html", context! {
    email_sent => false,
    email      => "",
  })
}

/// `POST /forgot-password`
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<ForgotPasswordForm>,
) -> Result<Html<String>, Error>
where
  S: ProviderStore + AuthBackend + 'static,
{
  match state.backend.request_password_reset(&form.email).await {
    Ok(()) => {
      state
        .flash
        .success("Email Sent", "Check your email for a password reset link.");
      render(&state, "forgot_password.html", context! {
        email_sent => true,
        email      => form.email,
      })
    }
    Err(e) => {
      state.flash.error("Error", e.to_string());
      render(&state, "forgot_password.html", context! {
        email_sent => false,
        email      => form.email,
      })
    }
  }
}
