//! The dashboard filter pipeline.
//!
//! A pure, conjunctive predicate over the directory snapshot. There is no
//! ranking or relevance scoring; the result preserves the snapshot's order,
//! which is the store's rating-descending order.

use crate::worker::Worker;

/// Sentinel city criterion meaning "no constraint".
pub const ALL_CITIES: &str = "All Cities";

/// Sentinel occupation criterion meaning "no constraint".
pub const ALL_SERVICES: &str = "All Services";

/// The three independent dashboard criteria. Empty string = unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerFilter {
  pub city:       String,
  pub occupation: String,
  pub query:      String,
}

impl WorkerFilter {
  /// True when a single record passes all four steps.
  pub fn matches(&self, worker: &Worker) -> bool {
    // Inactive listings are never shown, however permissive the criteria.
    if !worker.is_active {
      return false;
    }

    if !self.city.is_empty()
      && self.city != ALL_CITIES
      && !worker.city.eq_ignore_ascii_case(&self.city)
    {
      return false;
    }

    // Occupation names are compared case-insensitively against the
    // canonical lowercase name. (The two views this replaces disagreed on
    // case sensitivity here; see the test below.)
    if !self.occupation.is_empty()
      && self.occupation != ALL_SERVICES
      && !self.occupation.eq_ignore_ascii_case(worker.occupation.as_str())
    {
      return false;
    }

    if !self.query.is_empty() {
      let needle = self.query.to_lowercase();
      let in_name = worker.full_name.to_lowercase().contains(&needle);
      let in_description =
        !worker.description.is_empty() && worker.description.to_lowercase().contains(&needle);
      if !in_name && !in_description {
        return false;
      }
    }

    true
  }

  /// The visible subset, recomputed in full, in snapshot order.
  pub fn apply<'a>(&self, workers: &'a [Worker]) -> Vec<&'a Worker> {
    workers.iter().filter(|w| self.matches(w)).collect()
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
