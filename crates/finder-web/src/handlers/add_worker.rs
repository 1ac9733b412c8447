//! Handlers for the listing-creation view.

use axum::{
  Form,
  extract::State,
  response::{Html, IntoResponse, Redirect, Response},
};
use finder_core::{
  session::Session,
  store::{AuthBackend, ProviderStore},
  worker::{CITIES, NewWorker, ServiceType},
};
use minijinja::context;
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, handlers::render};

/// Form state, echoed back into the template on validation failure so the
/// user keeps what they typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerForm {
  #[serde(default)]
  pub full_name:   String,
  #[serde(default)]
  pub email:       String,
  #[serde(default)]
  pub phone:       String,
  #[serde(default)]
  pub city:        String,
  #[serde(default)]
  pub occupation:  String,
  #[serde(default)]
  pub experience:  String,
  #[serde(default)]
  pub description: String,
}

/// The view requires a session; without one the user is sent to the login
/// page with an explanation, and no form is rendered.
fn require_session<S>(state: &AppState<S>) -> Result<Session, Response> {
  match state.session.current() {
    Some(session) => Ok(session),
    None => {
      state.flash.error(
        "Authentication Required",
        "Please log in to add a service listing.",
      );
      Err(Redirect::to("/login").into_response())
    }
  }
}

fn render_form<S>(state: &AppState<S>, form: WorkerForm) -> Result<Html<String>, Error> {
  render(state, "add_worker.html", context! {
    form        => form,
    cities      => CITIES,
    occupations => ServiceType::ALL.map(|t| t.as_str()),
  })
}

/// `GET /add-worker`
pub async fn page<S>(State(state): State<AppState<S>>) -> Result<Response, Error>
where
  S: ProviderStore + AuthBackend + 'static,
{
  let session = match require_session(&state) {
    Ok(session) => session,
    Err(redirect) => return Ok(redirect),
  };

  // Pre-fill from the account profile; a failure just leaves the form blank.
  let mut form = WorkerForm::default();
  match state.backend.get_profile(session.user_id).await {
    Ok(Some(profile)) => {
      form.email = profile.email.unwrap_or_default();
      form.full_name = profile.full_name.unwrap_or_default();
    }
    Ok(None) => {}
    Err(e) => tracing::warn!(error = %e, "profile pre-fill failed"),
  }

  Ok(render_form(&state, form)?.into_response())
}

/// `POST /add-worker`
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<WorkerForm>,
) -> Result<Response, Error>
where
  S: ProviderStore + AuthBackend + 'static,
{
  let session = match require_session(&state) {
    Ok(session) => session,
    Err(redirect) => return Ok(redirect),
  };

  let occupation = match ServiceType::parse(&form.occupation) {
    Ok(occupation) => occupation,
    Err(_) => {
      state.flash.error("Error", "Please select a service type.");
      return Ok(render_form(&state, form)?.into_response());
    }
  };

  let experience: i64 = match form.experience.trim().parse() {
    Ok(n) => n,
    Err(_) => {
      state
        .flash
        .error("Invalid Experience", "Please enter your experience in whole years.");
      return Ok(render_form(&state, form)?.into_response());
    }
  };

  let input = NewWorker {
    user_id: session.user_id,
    full_name: form.full_name.clone(),
    email: form.email.clone(),
    phone: form.phone.clone(),
    city: form.city.clone(),
    occupation,
    experience,
    // Blank means absent, not an empty string.
    description: (!form.description.is_empty()).then(|| form.description.clone()),
  };

  // Validation failures block the submission; no store call is made.
  if input.validate().is_err() {
    state
      .flash
      .error("Invalid Experience", "Experience cannot be negative.");
    return Ok(render_form(&state, form)?.into_response());
  }

  match state.backend.insert_worker(input).await {
    Ok(()) => {
      state
        .flash
        .success("Success", "Your service listing has been created!");
      Ok(Redirect::to("/dashboard").into_response())
    }
    Err(e) => {
      // The backend's own message, verbatim, when it provides one.
      state.flash.error("Error", e.to_string());
      Ok(render_form(&state, form)?.into_response())
    }
  }
}
