//! # Menu Core
//!
//! Core types, traits, and error definitions for the menu translation service.
//! This crate holds the cache key and entry types, the static language
//! catalog, and the error type shared by every other layer.

pub mod domain;
pub mod error;
pub mod language;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use language::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
