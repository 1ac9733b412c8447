//! Integration tests for [`BackendClient`] against an in-process mock of
//! the backend wire surface.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex},
};

use axum::{
  Json, Router,
  extract::{Query, State},
  http::{HeaderMap, StatusCode},
  response::IntoResponse,
  routing::{get, post},
};
use finder_core::{
  session::NewAccount,
  store::{AuthBackend, ProviderStore},
  worker::{NewWorker, ServiceType},
};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{BackendClient, BackendConfig, Error};

const USER_ID: &str = "a1a2a3a4-b1b2-c1c2-d1d2-e1e2e3e4e5e6";

// ─── Mock backend ────────────────────────────────────────────────────────────

/// Everything the mock backend observed, for assertions.
#[derive(Default)]
struct Observed {
  list_query:    Option<HashMap<String, String>>,
  list_headers:  Option<(String, String)>,
  insert_bodies: Vec<Value>,
  insert_bearer: Option<String>,
  signup_bodies: Vec<Value>,
  recover_bodies: Vec<Value>,
}

#[derive(Clone, Default)]
struct MockState {
  observed:    Arc<Mutex<Observed>>,
  /// When set, POST /workers fails with this status and JSON body.
  insert_fail: Arc<Mutex<Option<(u16, Value)>>>,
  /// Rows returned by GET /workers.
  worker_rows: Arc<Mutex<Vec<Value>>>,
  /// Rows returned by GET /profiles.
  profile_rows: Arc<Mutex<Vec<Value>>>,
}

fn header(headers: &HeaderMap, name: &str) -> String {
  headers
    .get(name)
    .and_then(|v| v.to_str().ok())
    .unwrap_or_default()
    .to_owned()
}

async fn list_workers(
  State(state): State<MockState>,
  Query(params): Query<HashMap<String, String>>,
  headers: HeaderMap,
) -> Json<Value> {
  let mut observed = state.observed.lock().unwrap();
  observed.list_query = Some(params);
  observed.list_headers =
    Some((header(&headers, "apikey"), header(&headers, "authorization")));
  Json(Value::Array(state.worker_rows.lock().unwrap().clone()))
}

async fn insert_worker(
  State(state): State<MockState>,
  headers: HeaderMap,
  Json(body): Json<Value>,
) -> impl IntoResponse {
  {
    let mut observed = state.observed.lock().unwrap();
    observed.insert_bodies.push(body);
    observed.insert_bearer = Some(header(&headers, "authorization"));
  }
  if let Some((status, body)) = state.insert_fail.lock().unwrap().clone() {
    let status = StatusCode::from_u16(status).unwrap();
    return (status, Json(body)).into_response();
  }
  StatusCode::CREATED.into_response()
}

async fn get_profiles(State(state): State<MockState>) -> Json<Value> {
  Json(Value::Array(state.profile_rows.lock().unwrap().clone()))
}

async fn token(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
  if params.get("grant_type").map(String::as_str) != Some("password") {
    return (
      StatusCode::BAD_REQUEST,
      Json(json!({ "error_description": "unsupported grant type" })),
    )
      .into_response();
  }
  Json(json!({
    "access_token": "token-abc",
    "token_type":   "bearer",
    "expires_in":   3600,
    "user": { "id": USER_ID, "email": "user@example.com" },
  }))
  .into_response()
}

async fn signup(State(state): State<MockState>, Json(body): Json<Value>) -> Json<Value> {
  state.observed.lock().unwrap().signup_bodies.push(body);
  Json(json!({}))
}

async fn recover(State(state): State<MockState>, Json(body): Json<Value>) -> Json<Value> {
  state.observed.lock().unwrap().recover_bodies.push(body);
  Json(json!({}))
}

async fn spawn_mock(state: MockState) -> String {
  let app = Router::new()
    .route("/rest/v1/workers", get(list_workers).post(insert_worker))
    .route("/rest/v1/profiles", get(get_profiles))
    .route("/auth/v1/token", post(token))
    .route("/auth/v1/signup", post(signup))
    .route("/auth/v1/recover", post(recover))
    .with_state(state);

  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, app).await.unwrap();
  });
  format!("http://{addr}")
}

async fn client_against(state: MockState) -> BackendClient {
  let url = spawn_mock(state).await;
  BackendClient::new(BackendConfig { url, key: "test-key".to_owned() }).unwrap()
}

fn worker_row(name: &str) -> Value {
  json!({
    "id":             Uuid::new_v4(),
    "user_id":        Uuid::new_v4(),
    "full_name":      name,
    "email":          format!("{}@example.com", name.to_lowercase()),
    "phone":          "123",
    "city":           "Guntur",
    "occupation":     "plumber",
    "experience":     null,
    "description":    null,
    "average_rating": 4.5,
    "total_ratings":  3,
    "is_active":      true,
  })
}

fn new_worker(description: Option<&str>) -> NewWorker {
  NewWorker {
    user_id:     Uuid::new_v4(),
    full_name:   "Raj".to_owned(),
    email:       "raj@example.com".to_owned(),
    phone:       "123".to_owned(),
    city:        "Guntur".to_owned(),
    occupation:  ServiceType::Plumber,
    experience:  5,
    description: description.map(str::to_owned),
  }
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_workers_requests_rating_order() {
  let state = MockState::default();
  *state.worker_rows.lock().unwrap() = vec![worker_row("Raj")];
  let client = client_against(state.clone()).await;

  let rows = client.list_workers().await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].full_name, "Raj");
  // Nullable columns arrive as None; normalisation happens downstream.
  assert!(rows[0].experience.is_none());
  assert!(rows[0].description.is_none());

  let observed = state.observed.lock().unwrap();
  let query = observed.list_query.as_ref().unwrap();
  assert_eq!(query.get("select").map(String::as_str), Some("*"));
  assert_eq!(
    query.get("order").map(String::as_str),
    Some("average_rating.desc")
  );
}

#[tokio::test]
async fn requests_carry_apikey_and_bearer() {
  let state = MockState::default();
  let client = client_against(state.clone()).await;

  client.list_workers().await.unwrap();

  let observed = state.observed.lock().unwrap();
  let (apikey, authorization) = observed.list_headers.clone().unwrap();
  assert_eq!(apikey, "test-key");
  // No session yet: the bearer falls back to the public key.
  assert_eq!(authorization, "Bearer test-key");
}

#[tokio::test]
async fn get_profile_returns_first_row_or_none() {
  let state = MockState::default();
  *state.profile_rows.lock().unwrap() =
    vec![json!({ "email": "raj@example.com", "full_name": "Raj" })];
  let client = client_against(state.clone()).await;

  let profile = client.get_profile(Uuid::new_v4()).await.unwrap().unwrap();
  assert_eq!(profile.email.as_deref(), Some("raj@example.com"));
  assert_eq!(profile.full_name.as_deref(), Some("Raj"));

  state.profile_rows.lock().unwrap().clear();
  let missing = client.get_profile(Uuid::new_v4()).await.unwrap();
  assert!(missing.is_none());
}

// ─── Inserts ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_omits_description_when_blank() {
  let state = MockState::default();
  let client = client_against(state.clone()).await;

  client.insert_worker(new_worker(None)).await.unwrap();
  client.insert_worker(new_worker(Some("pipes"))).await.unwrap();

  let observed = state.observed.lock().unwrap();
  assert_eq!(observed.insert_bodies.len(), 2);
  // Absent, not an empty string or null.
  assert!(observed.insert_bodies[0].get("description").is_none());
  assert_eq!(
    observed.insert_bodies[1].get("description").and_then(Value::as_str),
    Some("pipes")
  );
  // The active flag is never part of the payload.
  assert!(observed.insert_bodies[0].get("is_active").is_none());
}

#[tokio::test]
async fn insert_failure_surfaces_backend_message_verbatim() {
  let state = MockState::default();
  *state.insert_fail.lock().unwrap() =
    Some((409, json!({ "message": "duplicate key value" })));
  let client = client_against(state.clone()).await;

  let err = client.insert_worker(new_worker(None)).await.unwrap_err();
  assert!(matches!(err, Error::Api { status: 409, .. }));
  assert_eq!(err.to_string(), "duplicate key value");
}

#[tokio::test]
async fn insert_failure_without_message_is_generic() {
  let state = MockState::default();
  *state.insert_fail.lock().unwrap() = Some((500, json!({ "oops": 1 })));
  let client = client_against(state.clone()).await;

  let err = client.insert_worker(new_worker(None)).await.unwrap_err();
  assert!(matches!(err, Error::Status(500)));
  assert_eq!(err.to_string(), "request failed with status 500");
}

// ─── Auth ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn sign_in_returns_session_and_upgrades_bearer() {
  let state = MockState::default();
  let client = client_against(state.clone()).await;

  let session = client.sign_in("user@example.com", "secret").await.unwrap();
  assert_eq!(session.user_id, Uuid::parse_str(USER_ID).unwrap());
  assert_eq!(session.email, "user@example.com");
  assert_eq!(session.access_token, "token-abc");

  // Row operations after sign-in act as the signed-in user.
  client.insert_worker(new_worker(None)).await.unwrap();
  let observed = state.observed.lock().unwrap();
  assert_eq!(observed.insert_bearer.as_deref(), Some("Bearer token-abc"));
}

#[tokio::test]
async fn sign_up_posts_account_metadata() {
  let state = MockState::default();
  let client = client_against(state.clone()).await;

  client
    .sign_up(NewAccount {
      email:     "new@example.com".to_owned(),
      password:  "secret".to_owned(),
      full_name: "New User".to_owned(),
      phone:     "456".to_owned(),
    })
    .await
    .unwrap();

  let observed = state.observed.lock().unwrap();
  let body = &observed.signup_bodies[0];
  assert_eq!(body["email"], "new@example.com");
  assert_eq!(body["data"]["full_name"], "New User");
  assert_eq!(body["data"]["phone"], "456");
}

#[tokio::test]
async fn recover_posts_email() {
  let state = MockState::default();
  let client = client_against(state.clone()).await;

  client.request_password_reset("user@example.com").await.unwrap();

  let observed = state.observed.lock().unwrap();
  assert_eq!(observed.recover_bodies[0]["email"], "user@example.com");
}
