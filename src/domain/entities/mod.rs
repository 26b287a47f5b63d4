//! Core domain entities.
//!
//! - [`ShortLink`] - A persisted key to target URL mapping
//! - [`NewShortLink`] - Already-validated input for the create path
//! - [`CreateOutcome`] - Result of a create request (created or key conflict)
//! - [`ShortUrls`] - The two public renderings of a created link

pub mod short_link;

pub use short_link::{CreateOutcome, NewShortLink, ShortLink, ShortUrls};
