//! Repository trait definitions.

use async_trait::async_trait;
use menu_core::{Interface, MenuResult, TranslationCacheEntry, TranslationKey};

/// Durable store of memoized translations.
///
/// Keys are unique: `put` on an existing key replaces the stored text and
/// refreshes `updated_at` but keeps `created_at`.
#[async_trait]
pub trait TranslationCacheRepository: Interface + Send + Sync {
    /// Looks up the entry stored under `key`.
    async fn get(&self, key: &TranslationKey) -> MenuResult<Option<TranslationCacheEntry>>;

    /// Inserts or overwrites the entry stored under `key`.
    async fn put(
        &self,
        key: &TranslationKey,
        source_text: &str,
        translated_text: &str,
    ) -> MenuResult<TranslationCacheEntry>;

    /// Removes every entry of one source object, across fields and languages.
    ///
    /// Returns the number of removed entries.
    async fn invalidate_object(&self, content_type: &str, object_id: u32) -> MenuResult<u64>;

    /// Counts all stored entries.
    async fn count(&self) -> MenuResult<u64>;
}
