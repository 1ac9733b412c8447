//! Web frontend for Services Finder.
//!
//! A single-user, self-hosted axum app over an external managed backend.
//! Every handler is generic over the [`ProviderStore`] and [`AuthBackend`]
//! traits, so tests (and alternative backends) can swap the HTTP client for
//! an in-memory double.

pub mod error;
pub mod flash;
pub mod handlers;
pub mod session;
pub mod templates;

pub use error::Error;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use finder_core::{
  directory::WorkerDirectory,
  store::{AuthBackend, ProviderStore},
};
use serde::Deserialize;

use flash::FlashQueue;
use session::SessionContext;
use templates::Templates;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `FINDER_*` environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

fn default_host() -> String {
  "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
  8080
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self { host: default_host(), port: default_port() }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub backend:   Arc<S>,
  pub directory: Arc<WorkerDirectory>,
  pub session:   SessionContext,
  pub flash:     FlashQueue,
  pub templates: Arc<Templates>,
}

// Derived `Clone` would demand `S: Clone`; every field is a handle already.
impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      backend:   Arc::clone(&self.backend),
      directory: Arc::clone(&self.directory),
      session:   self.session.clone(),
      flash:     self.flash.clone(),
      templates: Arc::clone(&self.templates),
    }
  }
}

impl<S> AppState<S> {
  pub fn new(backend: S) -> Result<Self, Error> {
    Ok(Self {
      backend:   Arc::new(backend),
      directory: Arc::new(WorkerDirectory::new()),
      session:   SessionContext::new(),
      flash:     FlashQueue::default(),
      templates: Arc::new(Templates::new()?),
    })
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the app.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ProviderStore + AuthBackend + 'static,
{
  Router::new()
    .route("/", get(handlers::home::page::<S>))
    .route(
      "/login",
      get(handlers::login::page::<S>).post(handlers::login::submit::<S>),
    )
    .route("/logout", post(handlers::login::logout::<S>))
    .route(
      "/register",
      get(handlers::register::page::<S>).post(handlers::register::submit::<S>),
    )
    .route(
      "/forgot-password",
      get(handlers::forgot_password::page::<S>)
        .post(handlers::forgot_password::submit::<S>),
    )
    .route("/dashboard", get(handlers::dashboard::page::<S>))
    .route("/dashboard/contact/{id}", post(handlers::dashboard::contact::<S>))
    .route(
      "/add-worker",
      get(handlers::add_worker::page::<S>).post(handlers::add_worker::submit::<S>),
    )
    .fallback(handlers::not_found::handler::<S>)
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
