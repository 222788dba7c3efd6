//! Translation service trait definition.

use async_trait::async_trait;
use menu_core::{Interface, LanguageInfo, MenuResult, TranslationKey};

/// Translation service trait.
#[async_trait]
pub trait TranslationService: Interface + Send + Sync {
    /// Translates `text` for the entity field identified by `key`.
    ///
    /// Only a malformed key is an error. Engine and storage failures are
    /// absorbed: the caller gets the original text back.
    async fn translate(&self, text: &str, key: &TranslationKey) -> MenuResult<String>;

    /// Lists the languages the engine can translate into, in catalog order.
    fn list_supported_languages(&self) -> Vec<LanguageInfo>;

    /// Looks up the native display name of a language code.
    fn display_name(&self, code: &str) -> Option<String>;

    /// Drops every cached translation of one source object.
    ///
    /// Returns the number of removed entries.
    async fn invalidate(&self, content_type: &str, object_id: u32) -> MenuResult<u64>;
}
