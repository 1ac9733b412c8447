//! Handlers for the account-registration view.

use axum::{
  Form,
  extract::State,
  response::{IntoResponse, Redirect, Response},
};
use finder_core::{
  session::NewAccount,
  store::{AuthBackend, ProviderStore},
};
use minijinja::context;
use serde::Deserialize;

use crate::{AppState, Error, handlers::render};

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
  pub full_name:        String,
  pub email:            String,
  pub phone:            String,
  pub password:         String,
  pub confirm_password: String,
}

/// `GET /register`
pub async fn page<S>(State(state): State<AppState<S>>) -> Result<Response, Error>
where
  S: ProviderStore + AuthBackend + 'static,
{
  if state.session.is_authenticated() {
    return Ok(Redirect::to("/dashboard").into_response());
  }
  let ctx = context! { full_name => "", email => "", phone => "" };
  Ok(render(&state, "register.html", ctx)?.into_response())
}

/// `POST /register`
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<RegisterForm>,
) -> Result<Response, Error>
where
  S: ProviderStore + AuthBackend + 'static,
{
  let echo = context! {
    full_name => form.full_name.clone(),
    email     => form.email.clone(),
    phone     => form.phone.clone(),
  };

  // Mismatched passwords never leave the client.
  if form.password != form.confirm_password {
    state.flash.error("Error", "Passwords do not match!");
    return Ok(render(&state, "register.html", echo)?.into_response());
  }

  let input = NewAccount {
    email:     form.email.clone(),
    password:  form.password,
    full_name: form.full_name.clone(),
    phone:     form.phone.clone(),
  };

  match state.backend.sign_up(input).await {
    Ok(()) => {
      state
        .flash
        .success("Success", "Account created successfully!");
      Ok(Redirect::to("/login").into_response())
    }
    Err(e) => {
      state.flash.error("Error", e.to_string());
      Ok(render(&state, "register.html", echo)?.into_response())
    }
  }
}
