//! The `ProviderStore` and `AuthBackend` traits.
//!
//! Both are implemented by the HTTP backend client (`finder-backend`).
//! The web layer depends on these abstractions, not on any concrete client.
//!
//! All methods return `Send` futures so the traits can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use uuid::Uuid;

use crate::{
  session::{NewAccount, Profile, Session},
  worker::{NewWorker, RawWorker},
};

// ─── Provider store ──────────────────────────────────────────────────────────

/// Read/insert access to the provider collection.
///
/// The store is the single source of truth: listings are never mutated or
/// deleted through this interface, and ratings are maintained entirely on
/// the store side.
pub trait ProviderStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All provider rows, ordered by average rating descending.
  fn list_workers(
    &self,
  ) -> impl Future<Output = Result<Vec<RawWorker>, Self::Error>> + Send + '_;

  /// Insert one new listing. The active flag is left to the store-side
  /// default; ownership is the `user_id` carried in `input`.
  fn insert_worker(
    &self,
    input: NewWorker,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// The account profile for `user_id`, if one exists.
  fn get_profile(
    &self,
    user_id: Uuid,
  ) -> impl Future<Output = Result<Option<Profile>, Self::Error>> + Send + '_;
}

// ─── Auth backend ────────────────────────────────────────────────────────────

/// Credential and session operations, all delegated to the backend.
pub trait AuthBackend: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Exchange email/password credentials for a session.
  fn sign_in<'a>(
    &'a self,
    email: &'a str,
    password: &'a str,
  ) -> impl Future<Output = Result<Session, Self::Error>> + Send + 'a;

  /// Create a new account. The backend sends its own confirmation mail.
  fn sign_up(
    &self,
    input: NewAccount,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Ask the backend to send a password-reset link to `email`.
  fn request_password_reset<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Invalidate the current session on the backend, if any.
  fn sign_out(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
