//! # Kanade
//!
//! A URL shortener that issues short keys drawn from the hiragana syllabary and
//! redirects them permanently to the stored URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Short link entities and the key-value store trait
//! - **Application Layer** ([`application`]) - Key reservation and create/resolve orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory store backends
//! - **API Layer** ([`api`]) - Handlers, DTOs with input validation, and middleware
//!
//! ## Create Flow
//!
//! 1. Validate `url`, optional `key` (2-30 chars) and optional `length` (2-30)
//! 2. Allocate a candidate key: the caller's key, or `length` random hiragana (default 4)
//! 3. Percent-encode the key (storage key) and escape the URL (stored target)
//! 4. Reserve the storage key: created, or conflict if it already exists
//! 5. Render `https://短.コム/<key>` and `https://xn--s7y.xn--tckwe/<encoded key>`
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional, in-memory store otherwise
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, Reservation, ShortLinkStore};
    pub use crate::config::ReserveMode;
    pub use crate::domain::entities::{CreateOutcome, NewShortLink, ShortLink, ShortUrls};
    pub use crate::domain::repositories::{KeyValueStore, StoreError, StoreResult};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::MemoryStore;
    pub use crate::state::AppState;
    pub use crate::utils::short_url::PublicHosts;
}
