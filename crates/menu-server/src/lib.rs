//! # Menu Server Library
//!
//! Component wiring and startup output for the menu translation server.

pub mod di;
pub mod startup;
