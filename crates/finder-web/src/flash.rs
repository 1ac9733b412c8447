//! One-shot notifications, rendered by the next page and then discarded.
//!
//! The queue is process-wide: a handler pushes, the next rendered page
//! drains. Redirect responses therefore carry their notifications across to
//! the page they land on.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
  Success,
  Error,
  Info,
}

/// A single notification: a short title and a one-line message.
#[derive(Debug, Clone, Serialize)]
pub struct Flash {
  pub kind:    FlashKind,
  pub title:   String,
  pub message: String,
}

/// Cheaply clonable handle to the pending-notification queue.
#[derive(Clone, Default)]
pub struct FlashQueue {
  inner: Arc<Mutex<Vec<Flash>>>,
}

impl FlashQueue {
  pub fn push(&self, kind: FlashKind, title: impl Into<String>, message: impl Into<String>) {
    self.lock().push(Flash {
      kind,
      title: title.into(),
      message: message.into(),
    });
  }

  pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
    self.push(FlashKind::Success, title, message);
  }

  pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
    self.push(FlashKind::Error, title, message);
  }

  pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
    self.push(FlashKind::Info, title, message);
  }

  /// Take every pending notification, leaving the queue empty.
  pub fn drain(&self) -> Vec<Flash> {
    std::mem::take(&mut *self.lock())
  }

  fn lock(&self) -> MutexGuard<'_, Vec<Flash>> {
    match self.inner.lock() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner(),
    }
  }
}
