//! Worker — one service-provider listing.
//!
//! The store is the sole authority over ratings and the active flag; this
//! crate only normalises what it reads and validates what it writes.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── ServiceType ─────────────────────────────────────────────────────────────

/// The fixed set of services a provider can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
  Mechanic,
  Plumber,
  Electrician,
  Carpenter,
  Painter,
  Cleaner,
  Delivery,
  Restaurant,
  Chef,
  Driver,
  Gardener,
  Other,
}

impl ServiceType {
  /// Every variant, in the order the listing form presents them.
  pub const ALL: [ServiceType; 12] = [
    Self::Mechanic,
    Self::Plumber,
    Self::Electrician,
    Self::Carpenter,
    Self::Painter,
    Self::Cleaner,
    Self::Delivery,
    Self::Restaurant,
    Self::Chef,
    Self::Driver,
    Self::Gardener,
    Self::Other,
  ];

  /// The lowercase name stored in the `occupation` column.
  /// Must match the `rename_all = "lowercase"` serde tags above.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Mechanic => "mechanic",
      Self::Plumber => "plumber",
      Self::Electrician => "electrician",
      Self::Carpenter => "carpenter",
      Self::Painter => "painter",
      Self::Cleaner => "cleaner",
      Self::Delivery => "delivery",
      Self::Restaurant => "restaurant",
      Self::Chef => "chef",
      Self::Driver => "driver",
      Self::Gardener => "gardener",
      Self::Other => "other",
    }
  }

  /// Case-insensitive parse; accepts the form of either dashboard dropdown.
  pub fn parse(s: &str) -> Result<Self> {
    let lower = s.to_ascii_lowercase();
    Self::ALL
      .into_iter()
      .find(|t| t.as_str() == lower)
      .ok_or_else(|| Error::UnknownServiceType(s.to_owned()))
  }
}

impl fmt::Display for ServiceType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Cities ──────────────────────────────────────────────────────────────────

/// The canonical selectable city list, shared by every view.
pub const CITIES: [&str; 10] = [
  "Kurnool",
  "Nellore",
  "Visakhapatnam",
  "Vijayawada",
  "Guntur",
  "Eluru",
  "Ongole",
  "Tirumala",
  "Rajahmundry",
  "Kakinada",
];

// ─── Worker ──────────────────────────────────────────────────────────────────

/// A fully-normalised provider listing as used by the views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
  pub id:             Uuid,
  pub user_id:        Uuid,
  pub full_name:      String,
  pub email:          String,
  pub phone:          String,
  /// Free text; matched case-insensitively.
  pub city:           String,
  pub occupation:     ServiceType,
  pub experience:     u32,
  /// Empty when the provider supplied none.
  pub description:    String,
  pub average_rating: f64,
  pub total_ratings:  u32,
  /// Only active listings are ever shown to browsing users.
  pub is_active:      bool,
}

// ─── RawWorker ───────────────────────────────────────────────────────────────

/// A provider row as returned by the store, before defaults are applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawWorker {
  pub id:             Uuid,
  pub user_id:        Uuid,
  pub full_name:      String,
  pub email:          String,
  pub phone:          String,
  pub city:           String,
  pub occupation:     ServiceType,
  pub experience:     Option<u32>,
  pub description:    Option<String>,
  pub average_rating: Option<f64>,
  pub total_ratings:  Option<u32>,
  pub is_active:      Option<bool>,
}

impl RawWorker {
  /// Substitute type-appropriate defaults for every nullable column.
  pub fn normalize(self) -> Worker {
    Worker {
      id:             self.id,
      user_id:        self.user_id,
      full_name:      self.full_name,
      email:          self.email,
      phone:          self.phone,
      city:           self.city,
      occupation:     self.occupation,
      experience:     self.experience.unwrap_or(0),
      description:    self.description.unwrap_or_default(),
      average_rating: self.average_rating.unwrap_or(0.0),
      total_ratings:  self.total_ratings.unwrap_or(0),
      is_active:      self.is_active.unwrap_or(false),
    }
  }
}

// ─── NewWorker ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::ProviderStore::insert_worker`].
///
/// The active flag is deliberately absent — it is left to the store-side
/// default. `description` is omitted entirely (not sent as an empty string)
/// when the provider wrote nothing.
#[derive(Debug, Clone, Serialize)]
pub struct NewWorker {
  pub user_id:     Uuid,
  pub full_name:   String,
  pub email:       String,
  pub phone:       String,
  pub city:        String,
  pub occupation:  ServiceType,
  /// Signed so that an out-of-range form value is representable — and
  /// rejectable — before any submission is attempted.
  pub experience:  i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl NewWorker {
  /// Reject invalid input before any network call is made.
  pub fn validate(&self) -> Result<()> {
    if self.experience < 0 {
      return Err(Error::NegativeExperience(self.experience));
    }
    Ok(())
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
