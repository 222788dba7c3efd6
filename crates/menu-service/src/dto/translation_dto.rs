//! Translation-related DTOs.

use menu_core::rules::{valid_key_segment, valid_language_code};
use menu_core::{TranslationKey, MENU_ITEM_CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Longest text accepted for a single translation.
pub const MAX_TEXT_LENGTH: u64 = 5_000;

fn default_content_type() -> String {
    MENU_ITEM_CONTENT_TYPE.to_string()
}

/// Request to translate one field of a source entity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TranslateRequest {
    /// Source text. An empty string is answered with an empty string.
    #[validate(length(max = 5000, message = "Text cannot exceed 5000 characters"))]
    #[schema(example = "牛ステーキ")]
    pub text: String,

    /// Kind of source entity.
    #[serde(default = "default_content_type")]
    #[validate(custom(function = "valid_key_segment"))]
    #[schema(example = "menu_item")]
    pub content_type: String,

    /// Identifier of the source entity.
    #[validate(range(min = 1, message = "object_id must be a positive integer"))]
    #[schema(example = 5)]
    pub object_id: u32,

    /// Translated attribute, e.g. `name` or `description`.
    #[validate(custom(function = "valid_key_segment"))]
    #[schema(example = "name")]
    pub field: String,

    /// Target language code. The server's configured default applies when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "valid_language_code"))]
    #[schema(example = "en_XX")]
    pub lang: Option<String>,
}

impl TranslateRequest {
    /// The requested language, or `default` when the request names none.
    #[must_use]
    pub fn target_language<'a>(&'a self, default: &'a str) -> &'a str {
        self.lang.as_deref().unwrap_or(default)
    }

    /// Builds the cache key this request addresses in `target_language`.
    #[must_use]
    pub fn key(&self, target_language: &str) -> TranslationKey {
        TranslationKey::new(&self.content_type, self.object_id, &self.field, target_language)
    }
}

/// Translation result.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TranslateResponse {
    /// The text as submitted.
    pub original: String,
    /// The translation, or the original text if none could be produced.
    pub translated: String,
    /// Target language code.
    pub language: String,
}

/// Result of dropping cached translations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvalidateResponse {
    /// Number of removed cache entries.
    pub deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply() {
        let request: TranslateRequest =
            serde_json::from_str(r#"{"text": "寿司", "object_id": 3, "field": "name"}"#).unwrap();

        assert_eq!(request.content_type, "menu_item");
        assert!(request.lang.is_none());
        assert!(request.validate().is_ok());

        let lang = request.target_language("fr_XX");
        assert_eq!(lang, "fr_XX");
        assert_eq!(request.key(lang), TranslationKey::menu_item(3, "name", "fr_XX"));
    }

    #[test]
    fn test_explicit_language_wins_over_default() {
        let request: TranslateRequest = serde_json::from_str(
            r#"{"text": "寿司", "object_id": 3, "field": "name", "lang": "ko_KR"}"#,
        )
        .unwrap();

        assert_eq!(request.target_language("fr_XX"), "ko_KR");
    }

    #[test]
    fn test_malformed_language_is_invalid() {
        let request: TranslateRequest = serde_json::from_str(
            r#"{"text": "寿司", "object_id": 3, "field": "name", "lang": "korean"}"#,
        )
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("lang"));
    }

    #[test]
    fn test_blank_field_is_invalid() {
        let request: TranslateRequest =
            serde_json::from_str(r#"{"text": "寿司", "object_id": 3, "field": ""}"#).unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("field"));
    }

    #[test]
    fn test_text_length_limit() {
        let request = TranslateRequest {
            text: "あ".repeat(MAX_TEXT_LENGTH as usize + 1),
            content_type: default_content_type(),
            object_id: 1,
            field: "description".to_string(),
            lang: None,
        };

        assert!(request.validate().is_err());
    }
}
