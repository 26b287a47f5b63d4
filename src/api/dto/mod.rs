//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for serialization and validator for input validation.
//! Validation is the only layer that enforces key and length bounds; the
//! services trust their input.

pub mod create;
pub mod health;
