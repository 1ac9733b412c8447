//! Session and account types issued by the external auth backend.
//!
//! The application never verifies credentials itself; it holds whatever the
//! backend issued and derives a single boolean (signed in or not) from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated session as issued by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
  pub user_id:      Uuid,
  pub email:        String,
  pub access_token: String,
  pub expires_at:   DateTime<Utc>,
}

/// Input to [`crate::store::AuthBackend::sign_up`].
#[derive(Debug, Clone)]
pub struct NewAccount {
  pub email:     String,
  pub password:  String,
  pub full_name: String,
  pub phone:     String,
}

/// The account profile used to pre-fill the listing form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
  pub email:     Option<String>,
  pub full_name: Option<String>,
}
