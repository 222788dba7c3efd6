//! # Menu Service
//!
//! Cache-through translation of menu content.
//!
//! [`CacheThroughTranslationService`] answers from the translation cache
//! when it can and asks a [`TranslationEngine`] otherwise. Engine and
//! storage failures never reach the caller; they are reported to a
//! [`TranslationObserver`] and the original text is served.

pub mod dto;
pub mod engine;
pub mod observability;
pub mod r#impl;
pub mod translation_service;

pub use dto::*;
pub use engine::*;
pub use observability::{register_metrics, TracingTranslationObserver, TranslationObserver};
pub use r#impl::CacheThroughTranslationService;
pub use translation_service::*;
