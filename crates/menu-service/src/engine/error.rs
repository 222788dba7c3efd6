//! Translation engine error types.

use thiserror::Error;

/// Failures of a single engine call.
///
/// None of these reach the caller of the translation service; they are
/// reported to the observer and the untranslated text is served instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The model cannot produce this language.
    #[error("Unsupported target language: {0}")]
    UnsupportedLanguage(String),

    /// The engine is not running or not ready yet.
    #[error("Translation engine unavailable: {0}")]
    Unavailable(String),

    /// The call did not finish in time.
    #[error("Translation timed out after {0} ms")]
    Timeout(u64),

    /// The request failed on the wire or was rejected.
    #[error("Translation request failed: {0}")]
    Request(String),

    /// The engine answered with something that is not a translation.
    #[error("Invalid engine response: {0}")]
    InvalidResponse(String),
}

impl EngineError {
    /// Short label used for metrics and structured logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage(_) => "unsupported_language",
            Self::Unavailable(_) => "unavailable",
            Self::Timeout(_) => "timeout",
            Self::Request(_) => "request",
            Self::InvalidResponse(_) => "invalid_response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(EngineError::UnsupportedLanguage("xx_YY".into()).kind(), "unsupported_language");
        assert_eq!(EngineError::Timeout(20_000).kind(), "timeout");
        assert_eq!(EngineError::InvalidResponse("eof".into()).kind(), "invalid_response");
    }

    #[test]
    fn test_display() {
        let err = EngineError::UnsupportedLanguage("xx_YY".to_string());
        assert_eq!(err.to_string(), "Unsupported target language: xx_YY");
    }
}
