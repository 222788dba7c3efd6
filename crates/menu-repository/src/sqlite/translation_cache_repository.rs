//! SQLite translation cache repository implementation.

use crate::{traits::TranslationCacheRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use menu_core::{MenuError, MenuResult, TranslationCacheEntry, TranslationKey};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite translation cache repository.
#[derive(Component, Clone)]
#[shaku(interface = TranslationCacheRepository)]
pub struct SqliteTranslationCacheRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteTranslationCacheRepository {
    /// Creates a new repository over the given pool.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a cache entry.
#[derive(Debug, FromRow)]
struct TranslationCacheRow {
    content_type: String,
    object_id: i64,
    field_name: String,
    target_language: String,
    source_text: String,
    translated_text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TranslationCacheRow> for TranslationCacheEntry {
    type Error = MenuError;

    fn try_from(row: TranslationCacheRow) -> Result<Self, Self::Error> {
        let object_id = u32::try_from(row.object_id).map_err(|_| {
            MenuError::Internal(format!("Invalid object_id in database: {}", row.object_id))
        })?;

        Ok(TranslationCacheEntry {
            key: TranslationKey::new(
                row.content_type,
                object_id,
                row.field_name,
                row.target_language,
            ),
            source_text: row.source_text,
            translated_text: row.translated_text,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TranslationCacheRepository for SqliteTranslationCacheRepository {
    async fn get(&self, key: &TranslationKey) -> MenuResult<Option<TranslationCacheEntry>> {
        debug!("Looking up cached translation: {}", key);

        let row = sqlx::query_as::<_, TranslationCacheRow>(
            r#"
            SELECT content_type, object_id, field_name, target_language,
                   source_text, translated_text, created_at, updated_at
            FROM translation_cache
            WHERE content_type = ? AND object_id = ? AND field_name = ? AND target_language = ?
            "#,
        )
        .bind(&key.content_type)
        .bind(i64::from(key.object_id))
        .bind(&key.field_name)
        .bind(&key.target_language)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(TranslationCacheEntry::try_from).transpose()
    }

    async fn put(
        &self,
        key: &TranslationKey,
        source_text: &str,
        translated_text: &str,
    ) -> MenuResult<TranslationCacheEntry> {
        debug!("Storing translation: {}", key);

        let now = Utc::now();
        let row = sqlx::query_as::<_, TranslationCacheRow>(
            r#"
            INSERT INTO translation_cache (
                content_type, object_id, field_name, target_language,
                source_text, translated_text, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (content_type, object_id, field_name, target_language) DO UPDATE SET
                source_text = excluded.source_text,
                translated_text = excluded.translated_text,
                updated_at = excluded.updated_at
            RETURNING content_type, object_id, field_name, target_language,
                      source_text, translated_text, created_at, updated_at
            "#,
        )
        .bind(&key.content_type)
        .bind(i64::from(key.object_id))
        .bind(&key.field_name)
        .bind(&key.target_language)
        .bind(source_text)
        .bind(translated_text)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool.inner())
        .await?;

        TranslationCacheEntry::try_from(row)
    }

    async fn invalidate_object(&self, content_type: &str, object_id: u32) -> MenuResult<u64> {
        debug!("Invalidating cached translations for {}:{}", content_type, object_id);

        let result = sqlx::query(
            "DELETE FROM translation_cache WHERE content_type = ? AND object_id = ?",
        )
        .bind(content_type)
        .bind(i64::from(object_id))
        .execute(self.pool.inner())
        .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> MenuResult<u64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM translation_cache")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count.0 as u64)
    }
}
