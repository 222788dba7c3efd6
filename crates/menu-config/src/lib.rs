//! # Menu Config
//!
//! Configuration management for the menu translation service.
//! Settings are layered from TOML files and `MENU_*` environment
//! variables, then validated once at startup.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
