//! REST API controllers.

pub mod health_controller;
pub mod language_controller;
pub mod metrics_controller;
pub mod translation_controller;

pub use health_controller::*;
