//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod create;
pub mod health;
pub mod resolve;

pub use create::{create_form_handler, create_handler};
pub use health::health_handler;
pub use resolve::{resolve_handler, resolve_query_handler};
