//! Translation engines.
//!
//! The model itself runs out of process. [`HttpTranslationEngine`] talks to
//! it over JSON and [`TimeoutEngine`] bounds the latency of any engine.

mod error;
mod http_engine;
mod timeout;

pub use error::EngineError;
pub use http_engine::HttpTranslationEngine;
pub use timeout::{TimeoutEngine, TimeoutEngineParameters};

use async_trait::async_trait;
use menu_core::Interface;

/// Machine translation from the source language into a target language.
#[async_trait]
pub trait TranslationEngine: Interface + Send + Sync {
    /// Engine name for logs.
    fn name(&self) -> &str;

    /// Translates `text` into `target_language`.
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, EngineError>;
}
