//! Key-value store backends.
//!
//! Provides two [`KeyValueStore`] implementations:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - In-process store for development and tests

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::KeyValueStore;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Opens the store backend selected by the configuration.
///
/// # Errors
///
/// Returns an error if the Redis backend is selected but unreachable, or if no
/// Redis URL is configured for it.
pub async fn connect(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::info!("Store backend: memory (links are lost on restart)");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("Redis backend selected but no Redis URL configured")?;
            let store = RedisStore::connect(redis_url, config.redis_key_prefix.clone())
                .await
                .context("Failed to open Redis store")?;
            tracing::info!("Store backend: redis");
            Ok(Arc::new(store))
        }
    }
}
