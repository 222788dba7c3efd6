//! Latency bound for engine calls.

use super::{EngineError, TranslationEngine};
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Wraps an engine so that no call outlives `timeout`.
///
/// This is the engine component of the application module; the wrapped
/// engine is passed in as a parameter.
#[derive(Component)]
#[shaku(interface = TranslationEngine)]
pub struct TimeoutEngine {
    inner: Arc<dyn TranslationEngine>,
    timeout: Duration,
}

impl TimeoutEngine {
    /// Creates a new timeout wrapper.
    pub fn new(inner: Arc<dyn TranslationEngine>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl TranslationEngine for TimeoutEngine {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String, EngineError> {
        tokio::time::timeout(self.timeout, self.inner.translate(text, target_language))
            .await
            .map_err(|_| {
                warn!(
                    "Engine '{}' timed out after {:?} translating into {}",
                    self.inner.name(),
                    self.timeout,
                    target_language
                );
                EngineError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
            })?
    }
}
