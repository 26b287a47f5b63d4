//! Key-value store contract backing the short link store.

use async_trait::async_trait;
use std::time::Duration;

/// Errors raised by a store backend.
///
/// All variants are transient from the caller's point of view: the request
/// fails with `503` and the client may retry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Operation(String),

    #[error("Store call timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// An opaque key-value backend.
///
/// `get` and `put` are individually atomic for a single key. Nothing else is
/// assumed about consistency between separate calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::MemoryStore`] - In-process map
/// - [`crate::infrastructure::store::RedisStore`] - Redis strings
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Stores `value` under `key` only if the key is absent.
    ///
    /// Returns `true` if the value was written, `false` if the key already existed.
    /// Must be atomic with respect to concurrent callers.
    async fn put_if_absent(&self, key: &str, value: &str) -> StoreResult<bool>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}
