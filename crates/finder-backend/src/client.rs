//! [`BackendClient`] — the reqwest wrapper over the backend REST surface.

use std::{sync::RwLock, time::Duration};

use finder_core::{
  session::Profile,
  store::ProviderStore,
  worker::{NewWorker, RawWorker},
};
use reqwest::{Client, RequestBuilder, Response};
use uuid::Uuid;

use crate::{BackendConfig, Error, Result};

/// Async HTTP client for the backend's row and auth APIs.
///
/// Holds the access token of the current session, when one exists, so that
/// row-level authorization on the backend sees the signed-in user. Requests
/// fall back to the public key when no session is active.
pub struct BackendClient {
  http:   Client,
  config: BackendConfig,
  token:  RwLock<Option<String>>,
}

impl BackendClient {
  pub fn new(config: BackendConfig) -> Result<Self> {
    let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
    Ok(Self { http, config, token: RwLock::new(None) })
  }

  pub(crate) fn rest_url(&self, path: &str) -> String {
    format!("{}/rest/v1{}", self.config.url.trim_end_matches('/'), path)
  }

  pub(crate) fn auth_url(&self, path: &str) -> String {
    format!("{}/auth/v1{}", self.config.url.trim_end_matches('/'), path)
  }

  pub(crate) fn http(&self) -> &Client {
    &self.http
  }

  /// Install (or clear) the access token used for subsequent requests.
  pub(crate) fn set_token(&self, token: Option<String>) {
    let mut guard = match self.token.write() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner(),
    };
    *guard = token;
  }

  fn bearer(&self) -> String {
    let guard = match self.token.read() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner(),
    };
    guard.clone().unwrap_or_else(|| self.config.key.clone())
  }

  /// Attach the public key and bearer token every backend request carries.
  pub(crate) fn authed(&self, req: RequestBuilder) -> RequestBuilder {
    req.header("apikey", &self.config.key).bearer_auth(self.bearer())
  }

  /// Convert a non-success response into an error, preferring the body's
  /// own message so backend errors reach the user verbatim.
  pub(crate) async fn api_error(resp: Response) -> Error {
    let status = resp.status().as_u16();
    tracing::debug!(status, "backend request failed");
    let body: serde_json::Value = match resp.json().await {
      Ok(body) => body,
      Err(_) => return Error::Status(status),
    };
    for key in ["message", "msg", "error_description"] {
      if let Some(message) = body.get(key).and_then(|v| v.as_str()) {
        return Error::Api { status, message: message.to_owned() };
      }
    }
    Error::Status(status)
  }
}

// ─── ProviderStore impl ──────────────────────────────────────────────────────

impl ProviderStore for BackendClient {
  type Error = Error;

  async fn list_workers(&self) -> Result<Vec<RawWorker>> {
    let resp = self
      .authed(self.http.get(self.rest_url("/workers")))
      .query(&[("select", "*"), ("order", "average_rating.desc")])
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Self::api_error(resp).await);
    }
    Ok(resp.json().await?)
  }

  async fn insert_worker(&self, input: NewWorker) -> Result<()> {
    let resp = self
      .authed(self.http.post(self.rest_url("/workers")))
      .header("Prefer", "return=minimal")
      .json(&input)
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Self::api_error(resp).await);
    }
    Ok(())
  }

  async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
    let resp = self
      .authed(self.http.get(self.rest_url("/profiles")))
      .query(&[
        ("id", format!("eq.{user_id}")),
        ("select", "email,full_name".to_owned()),
      ])
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Self::api_error(resp).await);
    }
    let rows: Vec<Profile> = resp.json().await?;
    Ok(rows.into_iter().next())
  }
}
