//! # Menu REST
//!
//! REST API layer using Axum for the menu translation service.
//! Provides translation, language catalog, metrics, and health endpoints.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
