#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use kanade::application::services::{LinkService, ShortLinkStore};
use kanade::config::ReserveMode;
use kanade::domain::repositories::{KeyValueStore, StoreError, StoreResult};
use kanade::infrastructure::store::MemoryStore;
use axum::ServiceExt;
use axum::extract::Request;
use kanade::routes::{app_router, router};
use kanade::state::AppState;
use kanade::utils::short_url::PublicHosts;
use std::sync::Arc;
use std::time::Duration;

pub const NATIVE_HOST: &str = "短.コム";
pub const ASCII_HOST: &str = "xn--s7y.xn--tckwe";

pub fn create_link_service(store: Arc<dyn KeyValueStore>, mode: ReserveMode) -> LinkService {
    LinkService::new(
        ShortLinkStore::new(store, Duration::from_millis(200), mode),
        PublicHosts::new(NATIVE_HOST, ASCII_HOST),
    )
}

pub fn create_test_state(store: Arc<dyn KeyValueStore>, mode: ReserveMode) -> AppState {
    AppState::new(Arc::new(create_link_service(store, mode)))
}

/// Test server over a fresh memory store, returned alongside the store so tests
/// can inspect what was written.
pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = create_test_state(store.clone(), ReserveMode::Atomic);
    let server = TestServer::new(router(state)).unwrap();
    (server, store)
}

/// Like [`create_test_server`], but served through the production stack including
/// trailing-slash normalization.
pub fn create_app_test_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = create_test_state(store.clone(), ReserveMode::Atomic);
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    let server = TestServer::new(app).unwrap();
    (server, store)
}

pub fn create_test_server_with(store: Arc<dyn KeyValueStore>) -> TestServer {
    let state = create_test_state(store, ReserveMode::Atomic);
    TestServer::new(router(state)).unwrap()
}

/// A backend whose every call fails, as if Redis went away.
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn put(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn put_if_absent(&self, _key: &str, _value: &str) -> StoreResult<bool> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

/// A backend that never answers.
pub struct HangingStore;

#[async_trait]
impl KeyValueStore for HangingStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        std::future::pending().await
    }

    async fn put(&self, _key: &str, _value: &str) -> StoreResult<()> {
        std::future::pending().await
    }

    async fn put_if_absent(&self, _key: &str, _value: &str) -> StoreResult<bool> {
        std::future::pending().await
    }

    async fn health_check(&self) -> bool {
        std::future::pending().await
    }

    fn backend_name(&self) -> &'static str {
        "hanging"
    }
}
