//! Business logic services for the application layer.

pub mod link_service;
pub mod short_link_store;

pub use link_service::LinkService;
pub use short_link_store::{Reservation, ShortLinkStore};
