//! Helpers for key allocation, percent-encoding and short URL rendering.
//!
//! - [`key_allocator`] - Candidate key allocation over the hiragana alphabet
//! - [`uri_encoding`] - Component and whole-URI percent-encoding
//! - [`short_url`] - Native and ASCII short URL rendering

pub mod key_allocator;
pub mod short_url;
pub mod uri_encoding;
