//! Short link store: timed access to the backend and the reserve-if-absent protocol.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::ReserveMode;
use crate::domain::repositories::{KeyValueStore, StoreError, StoreResult};

/// Outcome of a reservation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reservation {
    /// The key was absent and now holds the target.
    Created,
    /// The key already held a value; nothing was written.
    Conflict,
}

/// Wraps a [`KeyValueStore`] handle with a per-call timeout and a reservation strategy.
///
/// Each public method makes at most the store calls it documents, awaited one
/// after another. A timed-out call surfaces as [`StoreError::Timeout`]; nothing is
/// retried here.
#[derive(Clone)]
pub struct ShortLinkStore {
    store: Arc<dyn KeyValueStore>,
    timeout: Duration,
    mode: ReserveMode,
}

impl ShortLinkStore {
    /// Creates a new short link store.
    pub fn new(store: Arc<dyn KeyValueStore>, timeout: Duration, mode: ReserveMode) -> Self {
        Self {
            store,
            timeout,
            mode,
        }
    }

    pub fn mode(&self) -> ReserveMode {
        self.mode
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Looks up the target stored under a percent-encoded key.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails or does not answer in time.
    pub async fn get(&self, storage_key: &str) -> StoreResult<Option<String>> {
        self.timed(self.store.get(storage_key)).await
    }

    /// Stores `target` under `storage_key` unless the key already exists.
    ///
    /// # Strategies
    ///
    /// - [`ReserveMode::Atomic`] - one `put_if_absent` call
    /// - [`ReserveMode::CheckThenPut`] - `get`, then `put` if the key was absent.
    ///   Not atomic: two callers may both observe an absent key and both write,
    ///   and the later write wins. Both then report [`Reservation::Created`].
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if any store call fails or times out. In
    /// check-then-put mode a failure after a successful `get` leaves nothing
    /// written, because `put` is atomic per key.
    pub async fn create_if_absent(
        &self,
        storage_key: &str,
        target: &str,
    ) -> StoreResult<Reservation> {
        let reservation = match self.mode {
            ReserveMode::Atomic => {
                if self.timed(self.store.put_if_absent(storage_key, target)).await? {
                    Reservation::Created
                } else {
                    Reservation::Conflict
                }
            }
            ReserveMode::CheckThenPut => {
                if self.timed(self.store.get(storage_key)).await?.is_some() {
                    Reservation::Conflict
                } else {
                    self.timed(self.store.put(storage_key, target)).await?;
                    Reservation::Created
                }
            }
        };

        debug!(
            key = storage_key,
            mode = %self.mode,
            outcome = ?reservation,
            "Reservation finished"
        );

        Ok(reservation)
    }

    /// Checks if the backend is reachable within the configured timeout.
    pub async fn health_check(&self) -> bool {
        tokio::time::timeout(self.timeout, self.store.health_check())
            .await
            .unwrap_or(false)
    }

    async fn timed<T>(&self, call: impl Future<Output = StoreResult<T>>) -> StoreResult<T> {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
    }
}
