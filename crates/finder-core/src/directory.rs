//! [`WorkerDirectory`] — the fetch-and-normalize step and its snapshot.
//!
//! One instance serves every view. A refresh reads the full provider list,
//! normalises it, and installs it wholesale; a failed refresh leaves the
//! previous snapshot untouched. Concurrent refreshes are serialised by a
//! monotonic sequence: only the most recently *issued* refresh may install
//! its result, so a slow stale fetch can never clobber a newer one.

use std::sync::{
  RwLock, RwLockReadGuard, RwLockWriteGuard,
  atomic::{AtomicU64, Ordering},
};

use crate::{store::ProviderStore, worker::Worker};

#[derive(Debug, Default)]
pub struct WorkerDirectory {
  snapshot:  RwLock<Vec<Worker>>,
  /// Sequence number handed to the most recently issued refresh.
  issued:    AtomicU64,
  /// Sequence number of the refresh that last installed a snapshot.
  /// Only written under the `snapshot` write lock.
  installed: AtomicU64,
  /// Count of refreshes currently awaiting the store.
  in_flight: AtomicU64,
}

impl WorkerDirectory {
  pub fn new() -> Self {
    Self::default()
  }

  /// A copy of the current snapshot, in the store's rating-descending order.
  pub fn snapshot(&self) -> Vec<Worker> {
    self.read_lock().clone()
  }

  /// True while at least one refresh is awaiting the store — the loading
  /// flag that gates the spinner render.
  pub fn is_refreshing(&self) -> bool {
    self.in_flight.load(Ordering::SeqCst) > 0
  }

  /// Fetch the full provider list and replace the snapshot.
  ///
  /// On store failure the snapshot is left untouched and the error is
  /// returned for the caller to surface as a single notification. A refresh
  /// that resolves after a newer one has already installed returns `Ok` but
  /// installs nothing.
  pub async fn refresh<S: ProviderStore>(&self, store: &S) -> Result<(), S::Error> {
    let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

    self.in_flight.fetch_add(1, Ordering::SeqCst);
    let result = store.list_workers().await;
    self.in_flight.fetch_sub(1, Ordering::SeqCst);

    let workers: Vec<Worker> = result?.into_iter().map(|raw| raw.normalize()).collect();

    let mut guard = self.write_lock();
    if self.installed.load(Ordering::SeqCst) >= seq {
      // A refresh issued after this one already installed; drop the result.
      return Ok(());
    }
    self.installed.store(seq, Ordering::SeqCst);
    *guard = workers;
    Ok(())
  }

  fn read_lock(&self) -> RwLockReadGuard<'_, Vec<Worker>> {
    match self.snapshot.read() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner(),
    }
  }

  fn write_lock(&self) -> RwLockWriteGuard<'_, Vec<Worker>> {
    match self.snapshot.write() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner(),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
