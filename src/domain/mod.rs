//! Domain layer: the short link model and the storage contract it relies on.
//!
//! # Architecture
//!
//! - [`entities`] - Short link records and create outcomes
//! - [`repositories`] - The key-value store trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on axum, Redis or tokio timers. The
//! orchestration that ties key allocation, encoding and storage together lives in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
