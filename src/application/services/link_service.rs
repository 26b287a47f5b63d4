//! Link creation and resolution service.

use serde_json::json;
use tracing::{debug, info};

use crate::application::services::short_link_store::{Reservation, ShortLinkStore};
use crate::domain::entities::{CreateOutcome, NewShortLink, ShortLink};
use crate::error::AppError;
use crate::utils::key_allocator::allocate;
use crate::utils::short_url::PublicHosts;
use crate::utils::uri_encoding::{encode_component, encode_uri};

/// Service for creating and resolving short links.
///
/// Applies the key encoding discipline on both paths: keys are stored in their
/// percent-encoded component form, targets in their whole-URI escaped form.
#[derive(Clone)]
pub struct LinkService {
    store: ShortLinkStore,
    hosts: PublicHosts,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(store: ShortLinkStore, hosts: PublicHosts) -> Self {
        Self { store, hosts }
    }

    pub fn store(&self) -> &ShortLinkStore {
        &self.store
    }

    pub fn hosts(&self) -> &PublicHosts {
        &self.hosts
    }

    /// Creates a short link for already-validated input.
    ///
    /// # Flow
    ///
    /// 1. Escape the target URL
    /// 2. Allocate a candidate key (caller's key or a random hiragana key)
    /// 3. Percent-encode the key into its storage form
    /// 4. Reserve the key in the store
    ///
    /// A taken key is reported as [`CreateOutcome::Conflict`]; the caller may retry
    /// with another key or a longer random length. No retry happens here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store fails or times out.
    pub async fn create_short_link(&self, new_link: NewShortLink) -> Result<CreateOutcome, AppError> {
        let target_url = encode_uri(&new_link.url);
        let key = allocate(new_link.key, new_link.length);
        let storage_key = encode_component(&key);

        match self.store.create_if_absent(&storage_key, &target_url).await? {
            Reservation::Created => {
                info!("Created short link {} -> {}", storage_key, target_url);
                let urls = self.hosts.render(&storage_key);
                Ok(CreateOutcome::Created {
                    link: ShortLink::new(key, storage_key, target_url),
                    urls,
                })
            }
            Reservation::Conflict => {
                debug!("Key already taken: {}", storage_key);
                Ok(CreateOutcome::Conflict { key })
            }
        }
    }

    /// Resolves a user-facing key to its stored link.
    ///
    /// The key is percent-encoded before lookup. The stored target is returned
    /// as-is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link is stored under the key.
    /// Returns [`AppError::StoreUnavailable`] if the store fails or times out.
    pub async fn resolve(&self, key: &str) -> Result<ShortLink, AppError> {
        let storage_key = encode_component(key);

        match self.store.get(&storage_key).await? {
            Some(target_url) => Ok(ShortLink::new(key.to_string(), storage_key, target_url)),
            None => {
                debug!("Short link not found: {}", storage_key);
                Err(AppError::not_found(
                    "Short link not found",
                    json!({ "key": key }),
                ))
            }
        }
    }
}
