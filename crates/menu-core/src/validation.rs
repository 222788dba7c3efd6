//! Validation utilities.

use crate::{FieldError, MenuError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `MenuError` on failure.
    fn validate_request(&self) -> Result<(), MenuError> {
        self.validate().map_err(validation_errors_to_menu_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `MenuError`.
#[must_use]
pub fn validation_errors_to_menu_error(errors: ValidationErrors) -> MenuError {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    MenuError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Maximum length of the `content_type` and `field_name` key segments.
    pub const MAX_KEY_SEGMENT_LEN: usize = 50;

    /// Maximum length of a stored language code.
    pub const MAX_LANGUAGE_CODE_LEN: usize = 10;

    /// Validates a cache key segment such as `menu_item` or `description`.
    ///
    /// Segments are lowercase ASCII letters, digits and underscores, at most
    /// [`MAX_KEY_SEGMENT_LEN`] characters long.
    pub fn valid_key_segment(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::new("key_segment_empty"));
        }
        if value.len() > MAX_KEY_SEGMENT_LEN {
            return Err(ValidationError::new("key_segment_too_long"));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(ValidationError::new("key_segment_invalid_characters"));
        }
        Ok(())
    }

    /// Validates the shape of a language code like `en_XX` or `zh_CN`.
    ///
    /// Only the format is checked here; whether the engine supports the
    /// language is a separate question answered by the language catalog.
    pub fn valid_language_code(code: &str) -> Result<(), ValidationError> {
        if code.len() > MAX_LANGUAGE_CODE_LEN {
            return Err(ValidationError::new("language_code_too_long"));
        }
        let Some((language, region)) = code.split_once('_') else {
            return Err(ValidationError::new("language_code_format"));
        };
        let language_ok = language.len() == 2 && language.chars().all(|c| c.is_ascii_lowercase());
        let region_ok = region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase());
        if !language_ok || !region_ok {
            return Err(ValidationError::new("language_code_format"));
        }
        Ok(())
    }
}
