//! Reporting of cache and engine outcomes.
//!
//! The translation service never surfaces engine or storage failures to its
//! caller, so this is the only place they become visible.

use crate::engine::EngineError;
use menu_core::{Interface, MenuError, TranslationKey};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use shaku::Component;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Metric names for the translation service.
pub mod names {
    /// Lookups answered from the cache.
    pub const CACHE_HITS_TOTAL: &str = "menu_translation_cache_hits_total";
    /// Lookups that had to go to the engine.
    pub const CACHE_MISSES_TOTAL: &str = "menu_translation_cache_misses_total";
    /// Successful engine translations.
    pub const TRANSLATIONS_TOTAL: &str = "menu_translation_engine_success_total";
    /// Engine failures answered with the original text.
    pub const ENGINE_FAILURES_TOTAL: &str = "menu_translation_engine_failures_total";
    /// Store reads or writes that failed.
    pub const STORAGE_ERRORS_TOTAL: &str = "menu_translation_storage_errors_total";
    /// Engine call duration in seconds.
    pub const ENGINE_DURATION_SECONDS: &str = "menu_translation_engine_duration_seconds";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::CACHE_HITS_TOTAL,
        "Total number of translations served from the cache"
    );
    describe_counter!(
        names::CACHE_MISSES_TOTAL,
        "Total number of cache misses"
    );
    describe_counter!(
        names::TRANSLATIONS_TOTAL,
        "Total number of successful engine translations"
    );
    describe_counter!(
        names::ENGINE_FAILURES_TOTAL,
        "Total number of engine failures served with the original text"
    );
    describe_counter!(
        names::STORAGE_ERRORS_TOTAL,
        "Total number of failed cache reads and writes"
    );
    describe_histogram!(
        names::ENGINE_DURATION_SECONDS,
        "Engine call duration in seconds"
    );
}

/// Sink for the outcomes of cache-through translation.
pub trait TranslationObserver: Interface + Send + Sync {
    /// The key was found in the cache.
    fn cache_hit(&self, key: &TranslationKey);

    /// The key was not in the cache.
    fn cache_miss(&self, key: &TranslationKey);

    /// The engine produced a translation.
    fn translated(&self, key: &TranslationKey, elapsed: Duration);

    /// The engine failed and the original text was served.
    fn engine_failed(&self, key: &TranslationKey, error: &EngineError);

    /// Reading the cache failed; the lookup was treated as a miss.
    fn storage_read_failed(&self, key: &TranslationKey, error: &MenuError);

    /// Writing the cache failed; the translation was still served.
    fn storage_write_failed(&self, key: &TranslationKey, error: &MenuError);
}

/// Observer that emits tracing events and `metrics` counters.
#[derive(Component, Debug, Clone, Default)]
#[shaku(interface = TranslationObserver)]
pub struct TracingTranslationObserver;

impl TracingTranslationObserver {
    /// Creates a new observer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TranslationObserver for TracingTranslationObserver {
    fn cache_hit(&self, key: &TranslationKey) {
        debug!(%key, "Translation cache hit");
        counter!(
            names::CACHE_HITS_TOTAL,
            "target_language" => key.target_language.clone()
        )
        .increment(1);
    }

    fn cache_miss(&self, key: &TranslationKey) {
        debug!(%key, "Translation cache miss");
        counter!(
            names::CACHE_MISSES_TOTAL,
            "target_language" => key.target_language.clone()
        )
        .increment(1);
    }

    fn translated(&self, key: &TranslationKey, elapsed: Duration) {
        info!(%key, elapsed_ms = elapsed.as_millis() as u64, "Translated");
        counter!(
            names::TRANSLATIONS_TOTAL,
            "target_language" => key.target_language.clone()
        )
        .increment(1);
        histogram!(names::ENGINE_DURATION_SECONDS).record(elapsed.as_secs_f64());
    }

    fn engine_failed(&self, key: &TranslationKey, error: &EngineError) {
        warn!(%key, kind = error.kind(), error = %error, "Translation failed, serving original text");
        counter!(
            names::ENGINE_FAILURES_TOTAL,
            "target_language" => key.target_language.clone(),
            "kind" => error.kind()
        )
        .increment(1);
    }

    fn storage_read_failed(&self, key: &TranslationKey, error: &MenuError) {
        warn!(
            %key,
            error = %error,
            retriable = error.is_retriable(),
            "Translation cache read failed, treating as miss"
        );
        counter!(
            names::STORAGE_ERRORS_TOTAL,
            "operation" => "read",
            "code" => error.error_code()
        )
        .increment(1);
    }

    fn storage_write_failed(&self, key: &TranslationKey, error: &MenuError) {
        warn!(
            %key,
            error = %error,
            retriable = error.is_retriable(),
            "Translation cache write failed"
        );
        counter!(
            names::STORAGE_ERRORS_TOTAL,
            "operation" => "write",
            "code" => error.error_code()
        )
        .increment(1);
    }
}
