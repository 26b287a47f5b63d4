//! Application layer services implementing the create and resolve paths.
//!
//! Services consume the [`crate::domain::repositories::KeyValueStore`] trait and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::short_link_store::ShortLinkStore`] - Timed store access and key reservation
//! - [`services::link_service::LinkService`] - Create/resolve orchestration

pub mod services;
