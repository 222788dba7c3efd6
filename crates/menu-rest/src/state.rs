//! Application state for Axum handlers.

use menu_core::{HealthCheck, DEFAULT_TARGET_LANGUAGE, SOURCE_LANGUAGE};
use menu_service::TranslationService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub translation_service: Arc<dyn TranslationService>,
    /// Dependencies checked by `/ready`.
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
    /// Requests for this language are answered without translation.
    pub source_language: String,
    /// Target of translate requests that name no language.
    pub default_target_language: String,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(translation_service: Arc<dyn TranslationService>) -> Self {
        Self {
            translation_service,
            health_checks: Vec::new(),
            source_language: SOURCE_LANGUAGE.to_string(),
            default_target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            metrics: None,
        }
    }

    /// Adds a dependency to the readiness check.
    #[must_use]
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }

    /// Overrides the source language.
    #[must_use]
    pub fn with_source_language(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = source_language.into();
        self
    }

    /// Overrides the language used when a request omits `lang`.
    #[must_use]
    pub fn with_default_target_language(mut self, language: impl Into<String>) -> Self {
        self.default_target_language = language.into();
        self
    }

    /// Exposes the Prometheus recorder at the metrics endpoint.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
