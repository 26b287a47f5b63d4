//! HTTP API layer.
//!
//! Translates HTTP requests into service calls and formats responses. This is
//! the validation collaborator of the core: bounds are checked here, the
//! services receive only validated input.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - JSON API route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
