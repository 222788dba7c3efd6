//! Translation cache entry and its composite key.

use crate::validation::rules::{valid_key_segment, valid_language_code};
use crate::{MenuResult, ValidateExt};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Content type tag used for menu items.
pub const MENU_ITEM_CONTENT_TYPE: &str = "menu_item";

/// Composite identity of a cached translation.
///
/// At most one [`TranslationCacheEntry`] exists per key; the store enforces
/// this with a uniqueness constraint over all four columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct TranslationKey {
    /// Kind of source entity, e.g. `menu_item`.
    #[validate(custom(function = "valid_key_segment"))]
    pub content_type: String,
    /// Identifier of the source entity instance.
    #[validate(range(min = 1, message = "object_id must be a positive integer"))]
    pub object_id: u32,
    /// Translated attribute, e.g. `name` or `description`.
    #[validate(custom(function = "valid_key_segment"))]
    pub field_name: String,
    /// Target language code, e.g. `en_XX`.
    #[validate(custom(function = "valid_language_code"))]
    pub target_language: String,
}

impl TranslationKey {
    /// Creates a new key.
    pub fn new(
        content_type: impl Into<String>,
        object_id: u32,
        field_name: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            object_id,
            field_name: field_name.into(),
            target_language: target_language.into(),
        }
    }

    /// Creates a key for a menu item field.
    pub fn menu_item(
        object_id: u32,
        field_name: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self::new(MENU_ITEM_CONTENT_TYPE, object_id, field_name, target_language)
    }

    /// Checks that every segment of the key is well formed.
    pub fn ensure_valid(&self) -> MenuResult<()> {
        self.validate_request()
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} -> {}",
            self.content_type, self.object_id, self.field_name, self.target_language
        )
    }
}

/// One memoized translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCacheEntry {
    pub key: TranslationKey,
    /// The exact text that was sent to the engine.
    pub source_text: String,
    /// The engine output.
    pub translated_text: String,
    /// Set once, on first insertion.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every write.
    pub updated_at: DateTime<Utc>,
}

impl TranslationCacheEntry {
    /// Creates a fresh entry with both timestamps set to now.
    pub fn new(
        key: TranslationKey,
        source_text: impl Into<String>,
        translated_text: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            key,
            source_text: source_text.into(),
            translated_text: translated_text.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MenuError;

    #[test]
    fn test_menu_item_key() {
        let key = TranslationKey::menu_item(42, "name", "en_XX");
        assert_eq!(key.content_type, "menu_item");
        assert_eq!(key.object_id, 42);
        assert!(key.ensure_valid().is_ok());
    }

    #[test]
    fn test_key_display() {
        let key = TranslationKey::menu_item(5, "description", "zh_CN");
        assert_eq!(key.to_string(), "menu_item:5:description -> zh_CN");
    }

    #[test]
    fn test_key_rejects_zero_object_id() {
        let key = TranslationKey::menu_item(0, "name", "en_XX");
        assert!(matches!(key.ensure_valid(), Err(MenuError::Validation(_))));
    }

    #[test]
    fn test_key_rejects_malformed_segments() {
        assert!(TranslationKey::new("", 1, "name", "en_XX").ensure_valid().is_err());
        assert!(TranslationKey::new("menu_item", 1, "Name", "en_XX").ensure_valid().is_err());
        assert!(TranslationKey::new("menu_item", 1, "name", "english").ensure_valid().is_err());
        assert!(TranslationKey::new("x".repeat(51), 1, "name", "en_XX").ensure_valid().is_err());
    }

    #[test]
    fn test_key_accepts_well_formed_unsupported_language() {
        // Support is decided by the engine, not by key validation.
        let key = TranslationKey::menu_item(5, "name", "xx_YY");
        assert!(key.ensure_valid().is_ok());
    }

    #[test]
    fn test_keys_differing_by_field_are_distinct() {
        let name = TranslationKey::menu_item(1, "name", "en_XX");
        let description = TranslationKey::menu_item(1, "description", "en_XX");
        assert_ne!(name, description);
    }
}
