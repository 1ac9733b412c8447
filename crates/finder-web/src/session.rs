//! The process-wide observable session context.
//!
//! One instance serves every view: handlers read the current session from
//! it, auth handlers write to it, and anything interested in transitions
//! subscribes to its watch channel. Dropping a receiver unsubscribes.

use std::sync::Arc;

use finder_core::session::Session;
use tokio::sync::watch;

#[derive(Clone)]
pub struct SessionContext {
  tx: Arc<watch::Sender<Option<Session>>>,
}

impl SessionContext {
  pub fn new() -> Self {
    let (tx, _rx) = watch::channel(None);
    Self { tx: Arc::new(tx) }
  }

  /// The current session, if signed in.
  pub fn current(&self) -> Option<Session> {
    self.tx.borrow().clone()
  }

  pub fn is_authenticated(&self) -> bool {
    self.tx.borrow().is_some()
  }

  /// Install or clear the session, notifying every subscriber.
  pub fn set(&self, session: Option<Session>) {
    self.tx.send_replace(session);
  }

  /// A receiver over session changes.
  pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
    self.tx.subscribe()
  }

  /// Log sign-in/sign-out transitions for the lifetime of the task.
  pub fn spawn_change_logger(&self) -> tokio::task::JoinHandle<()> {
    let mut rx = self.subscribe();
    tokio::spawn(async move {
      while rx.changed().await.is_ok() {
        let email = rx.borrow_and_update().as_ref().map(|s| s.email.clone());
        match email {
          Some(email) => tracing::info!(%email, "session established"),
          None => tracing::info!("session cleared"),
        }
      }
    })
  }
}

impl Default for SessionContext {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use chrono::{Duration, Utc};
  use uuid::Uuid;

  use super::*;

  fn session() -> Session {
    Session {
      user_id:      Uuid::new_v4(),
      email:        "user@example.com".to_owned(),
      access_token: "tok".to_owned(),
      expires_at:   Utc::now() + Duration::hours(1),
    }
  }

  #[tokio::test]
  async fn set_is_visible_to_current_and_subscribers() {
    let ctx = SessionContext::new();
    assert!(!ctx.is_authenticated());

    let mut rx = ctx.subscribe();
    ctx.set(Some(session()));

    assert!(ctx.is_authenticated());
    assert_eq!(ctx.current().unwrap().email, "user@example.com");

    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_some());

    ctx.set(None);
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_none());
  }
}
