//! Translation service implementations.
//!
//! Trait definitions live in the parent module (`translation_service.rs`).

pub mod translation_service_impl;

pub use translation_service_impl::CacheThroughTranslationService;
