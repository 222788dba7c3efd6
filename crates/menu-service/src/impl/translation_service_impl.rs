//! Cache-through translation service.

use crate::engine::TranslationEngine;
use crate::observability::TranslationObserver;
use crate::translation_service::TranslationService;
use async_trait::async_trait;
use menu_core::rules::valid_key_segment;
use menu_core::{LanguageCatalog, LanguageInfo, MenuError, MenuResult, TranslationKey};
use menu_repository::TranslationCacheRepository;
use shaku::Component;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Serves translations from the cache and fills it from the engine on a miss.
///
/// Per call there is at most one engine call and at most one cache write.
/// Concurrent misses on one key may each reach the engine; the store's
/// upsert makes the resulting writes converge.
#[derive(Component)]
#[shaku(interface = TranslationService)]
pub struct CacheThroughTranslationService {
    #[shaku(inject)]
    repository: Arc<dyn TranslationCacheRepository>,
    #[shaku(inject)]
    engine: Arc<dyn TranslationEngine>,
    #[shaku(inject)]
    observer: Arc<dyn TranslationObserver>,
}

impl CacheThroughTranslationService {
    /// Creates a new translation service.
    pub fn new(
        repository: Arc<dyn TranslationCacheRepository>,
        engine: Arc<dyn TranslationEngine>,
        observer: Arc<dyn TranslationObserver>,
    ) -> Self {
        Self {
            repository,
            engine,
            observer,
        }
    }

    async fn lookup(&self, key: &TranslationKey) -> Option<String> {
        match self.repository.get(key).await {
            Ok(Some(entry)) => {
                self.observer.cache_hit(key);
                Some(entry.translated_text)
            }
            Ok(None) => {
                self.observer.cache_miss(key);
                None
            }
            Err(e) => {
                self.observer.storage_read_failed(key, &e);
                self.observer.cache_miss(key);
                None
            }
        }
    }
}

#[async_trait]
impl TranslationService for CacheThroughTranslationService {
    async fn translate(&self, text: &str, key: &TranslationKey) -> MenuResult<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        key.ensure_valid()?;

        if let Some(cached) = self.lookup(key).await {
            return Ok(cached);
        }

        let started = Instant::now();
        match self.engine.translate(text, &key.target_language).await {
            Ok(translated) => {
                self.observer.translated(key, started.elapsed());
                if let Err(e) = self.repository.put(key, text, &translated).await {
                    self.observer.storage_write_failed(key, &e);
                }
                Ok(translated)
            }
            Err(e) => {
                self.observer.engine_failed(key, &e);
                Ok(text.to_string())
            }
        }
    }

    fn list_supported_languages(&self) -> Vec<LanguageInfo> {
        LanguageCatalog::entries()
    }

    fn display_name(&self, code: &str) -> Option<String> {
        LanguageCatalog::display_name(code).map(str::to_string)
    }

    async fn invalidate(&self, content_type: &str, object_id: u32) -> MenuResult<u64> {
        debug!("Invalidating translations for {}:{}", content_type, object_id);

        valid_key_segment(content_type).map_err(|_| {
            MenuError::validation(format!("Invalid content_type: '{}'", content_type))
        })?;
        if object_id == 0 {
            return Err(MenuError::validation("object_id must be a positive integer"));
        }

        let deleted = self.repository.invalidate_object(content_type, object_id).await?;

        info!(
            "Invalidated {} cached translations for {}:{}",
            deleted, content_type, object_id
        );
        Ok(deleted)
    }
}
