//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Handles shared by all requests.
///
/// Holds no mutable state of its own: the store behind [`LinkService`] is the
/// only place links live.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
