//! Auth operations against the backend's token API.
//!
//! Sessions are issued and invalidated entirely by the backend; this module
//! only moves credentials and tokens across the wire.

use chrono::{Duration, Utc};
use finder_core::{
  session::{NewAccount, Session},
  store::AuthBackend,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{BackendClient, Error, Result};

// ─── Wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
  email:    &'a str,
  password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignupRequest {
  email:    String,
  password: String,
  data:     SignupMetadata,
}

/// Free-form metadata the backend attaches to the new account.
#[derive(Debug, Serialize)]
struct SignupMetadata {
  full_name: String,
  phone:     String,
}

#[derive(Debug, Serialize)]
struct RecoverRequest<'a> {
  email: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
  access_token: String,
  expires_in:   i64,
  user:         TokenUser,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
  id:    Uuid,
  email: Option<String>,
}

// ─── AuthBackend impl ────────────────────────────────────────────────────────

impl AuthBackend for BackendClient {
  type Error = Error;

  async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
    let resp = self
      .authed(self.http().post(self.auth_url("/token")))
      .query(&[("grant_type", "password")])
      .json(&PasswordGrant { email, password })
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Self::api_error(resp).await);
    }

    let token: TokenResponse = resp.json().await?;
    let session = Session {
      user_id:      token.user.id,
      email:        token.user.email.unwrap_or_else(|| email.to_owned()),
      access_token: token.access_token,
      expires_at:   Utc::now() + Duration::seconds(token.expires_in),
    };

    // Subsequent row operations act as this user.
    self.set_token(Some(session.access_token.clone()));
    Ok(session)
  }

  async fn sign_up(&self, input: NewAccount) -> Result<()> {
    let body = SignupRequest {
      email:    input.email,
      password: input.password,
      data:     SignupMetadata {
        full_name: input.full_name,
        phone:     input.phone,
      },
    };

    let resp = self
      .authed(self.http().post(self.auth_url("/signup")))
      .json(&body)
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Self::api_error(resp).await);
    }
    Ok(())
  }

  async fn request_password_reset(&self, email: &str) -> Result<()> {
    let resp = self
      .authed(self.http().post(self.auth_url("/recover")))
      .json(&RecoverRequest { email })
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Self::api_error(resp).await);
    }
    Ok(())
  }

  async fn sign_out(&self) -> Result<()> {
    let resp = self
      .authed(self.http().post(self.auth_url("/logout")))
      .send()
      .await?;

    // The local token is dropped whether or not the backend call succeeded.
    self.set_token(None);

    if !resp.status().is_success() {
      return Err(Self::api_error(resp).await);
    }
    Ok(())
  }
}
