//! Storage trait definitions for the domain layer.
//!
//! The service only needs an opaque key-value backend. Implementations live in
//! `crate::infrastructure::store`; mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Traits
//!
//! - [`KeyValueStore`] - get/put plus an atomic conditional put

pub mod key_value_store;

pub use key_value_store::{KeyValueStore, StoreError, StoreResult};

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
