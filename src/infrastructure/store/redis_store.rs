//! Redis-backed key-value store.

use crate::domain::repositories::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Stores each short link as a Redis string under a namespaced key.
///
/// Uses `ConnectionManager` for automatic reconnection. Unlike a cache, errors
/// are propagated: a failed read must not look like a missing key, or the create
/// path would overwrite an existing link.
pub struct RedisStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - Namespace prepended to every storage key (`REDIS_KEY_PREFIX`)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> StoreResult<Self> {
        info!("Connecting to Redis store");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis store");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();

        let value = conn
            .get::<_, Option<String>>(self.build_key(key))
            .await
            .map_err(|e| StoreError::Operation(format!("GET {}: {}", key, e)))?;

        debug!("Store {}: {}", if value.is_some() { "HIT" } else { "MISS" }, key);
        Ok(value)
    }

    async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(self.build_key(key), value)
            .await
            .map_err(|e| StoreError::Operation(format!("SET {}: {}", key, e)))?;

        debug!("Store SET: {} -> {}", key, value);
        Ok(())
    }

    async fn put_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        let mut conn = self.client.clone();

        let written = conn
            .set_nx::<_, _, bool>(self.build_key(key), value)
            .await
            .map_err(|e| StoreError::Operation(format!("SETNX {}: {}", key, e)))?;

        debug!("Store SETNX: {} -> {} (written: {})", key, value, written);
        Ok(written)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
