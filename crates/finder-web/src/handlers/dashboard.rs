//! Handlers for the browse/dashboard view.
//!
//! The snapshot is re-fetched on every visit; filtering is a full
//! recomputation over it. A fetch failure keeps the previous snapshot and
//! surfaces exactly one notification.

use axum::{
  extract::{Path, Query, State},
  response::{Html, IntoResponse, Redirect, Response},
};
use finder_core::{
  filter::{ALL_CITIES, ALL_SERVICES, WorkerFilter},
  store::{AuthBackend, ProviderStore},
  worker::{CITIES, ServiceType, Worker},
};
use minijinja::context;
use serde::Deserialize;
use uuid::Uuid;

use crate::{AppState, Error, handlers::render};

#[derive(Debug, Deserialize, Default)]
pub struct DashboardParams {
  pub city:       Option<String>,
  pub occupation: Option<String>,
  pub q:          Option<String>,
}

/// `GET /dashboard[?city=...][&occupation=...][&q=...]`
pub async fn page<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<DashboardParams>,
) -> Result<Html<String>, Error>
where
  S: ProviderStore + AuthBackend + 'static,
{
  if let Err(e) = state.directory.refresh(state.backend.as_ref()).await {
    tracing::warn!(error = %e, "provider list fetch failed");
    state
      .flash
      .error("Error", "Failed to load service providers. Please try again.");
  }

  let filter = WorkerFilter {
    city:       params.city.unwrap_or_default(),
    occupation: params.occupation.unwrap_or_default(),
    query:      params.q.unwrap_or_default(),
  };

  let snapshot = state.directory.snapshot();
  let visible: Vec<Worker> = filter.apply(&snapshot).into_iter().cloned().collect();

  render(&state, "dashboard.html", context! {
    workers             => visible,
    cities              => CITIES,
    occupations         => ServiceType::ALL.map(|t| t.as_str()),
    all_cities          => ALL_CITIES,
    all_services        => ALL_SERVICES,
    selected_city       => filter.city,
    selected_occupation => filter.occupation,
    query               => filter.query,
    refreshing          => state.directory.is_refreshing(),
  })
}

/// `POST /dashboard/contact/{id}` — the "book service" action: flash the
/// provider's contact details and return to the dashboard.
pub async fn contact<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
) -> Result<Response, Error>
where
  S: ProviderStore + AuthBackend + 'static,
{
  let snapshot = state.directory.snapshot();
  if let Some(worker) = snapshot.iter().find(|w| w.id == id) {
    state.flash.info(
      "Contact Information",
      format!(
        "Call {} or email {} to book this service.",
        worker.phone, worker.email
      ),
    );
  }
  Ok(Redirect::to("/dashboard").into_response())
}
