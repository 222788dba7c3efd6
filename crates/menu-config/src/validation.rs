//! Configuration validation module.
//!
//! Checks every section up front so that a bad value stops the process at
//! startup instead of surfacing on the first translation request.

use crate::AppConfig;
use menu_core::rules::valid_language_code;
use menu_core::LanguageCatalog;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Sampling ratio must be between 0.0 and 1.0.
    InvalidSamplingRatio { value: f64 },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String, value: u64 },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Log format is invalid.
    InvalidLogFormat { value: String },
    /// Language code is malformed.
    InvalidLanguageCode { name: String, value: String },
    /// Language code is well formed but not in the catalog.
    UnsupportedLanguage { name: String, value: String },
    /// The default target equals the source language.
    TargetIsSource { value: String },
    /// Generation length limit must be positive.
    InvalidMaxNewTokens,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {}: {} (must be 1-65535)", name, value)
            }
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({}) cannot be greater than max ({})",
                    min, max
                )
            }
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(f, "Pool size {} exceeds maximum allowed ({})", value, maximum)
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::InvalidSamplingRatio { value } => {
                write!(
                    f,
                    "Invalid sampling ratio: {} (must be between 0.0 and 1.0)",
                    value
                )
            }
            Self::NonPositiveTimeout { name, value } => {
                write!(f, "Timeout '{}' must be positive, got {}", name, value)
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                    value
                )
            }
            Self::InvalidLogFormat { value } => {
                write!(f, "Invalid log format: '{}' (valid: json, pretty)", value)
            }
            Self::InvalidLanguageCode { name, value } => {
                write!(f, "Invalid language code for {}: '{}' (expected ll_CC)", name, value)
            }
            Self::UnsupportedLanguage { name, value } => {
                write!(f, "Language '{}' for {} is not in the supported catalog", value, name)
            }
            Self::TargetIsSource { value } => {
                write!(
                    f,
                    "Default target language '{}' must differ from the source language",
                    value
                )
            }
            Self::InvalidMaxNewTokens => {
                write!(f, "translation.max_new_tokens must be positive")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<ConfigValidationError>,
}

impl ValidationResult {
    fn add_error(&mut self, error: ConfigValidationError) {
        self.errors.push(error);
    }

    fn into_result(self) -> Result<(), Vec<ConfigValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 64;
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    /// Valid log formats.
    const VALID_LOG_FORMATS: &'static [&'static str] = &["json", "pretty"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut result = ValidationResult::default();

        Self::validate_server(&config.server, &mut result);
        Self::validate_database(&config.database, &mut result);
        Self::validate_translation(&config.translation, &mut result);
        Self::validate_observability(&config.observability, &mut result);

        result.into_result()
    }

    fn validate_server(config: &crate::ServerConfig, result: &mut ValidationResult) {
        if config.port == 0 {
            result.add_error(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: config.port,
            });
        }

        if config.request_timeout_secs == 0 {
            result.add_error(ConfigValidationError::NonPositiveTimeout {
                name: "server.request_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_database(config: &crate::DatabaseConfig, result: &mut ValidationResult) {
        if config.url.is_empty() {
            result.add_error(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if !config.url.starts_with("sqlite:") {
            result.add_error(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL must start with sqlite:".to_string(),
            });
        }

        if config.min_connections > config.max_connections {
            result.add_error(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if config.max_connections > Self::MAX_POOL_SIZE {
            result.add_error(ConfigValidationError::PoolSizeTooLarge {
                value: config.max_connections,
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        if config.connect_timeout_secs == 0 {
            result.add_error(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
                value: 0,
            });
        }
        if config.idle_timeout_secs == 0 {
            result.add_error(ConfigValidationError::NonPositiveTimeout {
                name: "database.idle_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_translation(config: &crate::TranslationConfig, result: &mut ValidationResult) {
        match Url::parse(&config.engine_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => result.add_error(ConfigValidationError::InvalidUrl {
                url_type: "translation.engine_url".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => result.add_error(ConfigValidationError::InvalidUrl {
                url_type: "translation.engine_url".to_string(),
                message: e.to_string(),
            }),
        }

        if config.request_timeout_secs == 0 {
            result.add_error(ConfigValidationError::NonPositiveTimeout {
                name: "translation.request_timeout_secs".to_string(),
                value: 0,
            });
        }

        if config.max_new_tokens == 0 {
            result.add_error(ConfigValidationError::InvalidMaxNewTokens);
        }

        let languages = [
            ("translation.source_language", &config.source_language),
            ("translation.default_target_language", &config.default_target_language),
        ];
        for (name, code) in languages {
            if valid_language_code(code).is_err() {
                result.add_error(ConfigValidationError::InvalidLanguageCode {
                    name: name.to_string(),
                    value: code.clone(),
                });
            } else if !LanguageCatalog::is_supported(code) {
                result.add_error(ConfigValidationError::UnsupportedLanguage {
                    name: name.to_string(),
                    value: code.clone(),
                });
            }
        }

        if config.default_target_language == config.source_language {
            result.add_error(ConfigValidationError::TargetIsSource {
                value: config.default_target_language.clone(),
            });
        }
    }

    fn validate_observability(config: &crate::ObservabilityConfig, result: &mut ValidationResult) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            result.add_error(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }

        let format = config.log_format.to_lowercase();
        if !Self::VALID_LOG_FORMATS.contains(&format.as_str()) {
            result.add_error(ConfigValidationError::InvalidLogFormat {
                value: config.log_format.clone(),
            });
        }

        if !(0.0..=1.0).contains(&config.sampling_ratio) {
            result.add_error(ConfigValidationError::InvalidSamplingRatio {
                value: config.sampling_ratio,
            });
        }

        if let Some(ref endpoint) = config.otlp_endpoint {
            if Url::parse(endpoint).is_err() {
                result.add_error(ConfigValidationError::InvalidUrl {
                    url_type: "otlp_endpoint".to_string(),
                    message: format!("Invalid URL format: {}", endpoint),
                });
            }
        }
    }
}

/// Formats validation errors for display.
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_for(config: &AppConfig) -> Vec<ConfigValidationError> {
        ConfigValidator::validate(config).unwrap_err()
    }

    #[test]
    fn test_default_config_passes() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_toml_config_passes() {
        let config: AppConfig = toml::from_str(
            r#"
            [translation]
            engine_url = "https://inference.internal:8443"
            default_target_language = "zh_CN"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert!(ConfigValidator::validate(&config).is_ok());
        assert!(config.observability.is_json());
    }

    #[test]
    fn test_invalid_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        assert!(errors_for(&config).iter().any(|e| matches!(
            e,
            ConfigValidationError::InvalidPort { name, .. } if name == "server.port"
        )));
    }

    #[test]
    fn test_invalid_pool_size() {
        let mut config = AppConfig::default();
        config.database.min_connections = 10;
        config.database.max_connections = 2;

        assert!(errors_for(&config)
            .iter()
            .any(|e| matches!(e, ConfigValidationError::InvalidPoolSize { .. })));
    }

    #[test]
    fn test_non_sqlite_database_url() {
        let mut config = AppConfig::default();
        config.database.url = "mysql://localhost/menu".to_string();

        assert!(errors_for(&config).iter().any(|e| matches!(
            e,
            ConfigValidationError::InvalidUrl { url_type, .. } if url_type == "database"
        )));
    }

    #[test]
    fn test_in_memory_database_passes() {
        let mut config = AppConfig::default();
        config.database = crate::DatabaseConfig::in_memory();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_invalid_engine_url() {
        let mut config = AppConfig::default();
        config.translation.engine_url = "not a url".to_string();
        assert!(errors_for(&config).iter().any(|e| matches!(
            e,
            ConfigValidationError::InvalidUrl { url_type, .. } if url_type == "translation.engine_url"
        )));

        config.translation.engine_url = "ftp://inference:21".to_string();
        assert!(errors_for(&config).iter().any(|e| matches!(
            e,
            ConfigValidationError::InvalidUrl { url_type, .. } if url_type == "translation.engine_url"
        )));
    }

    #[test]
    fn test_zero_engine_timeout() {
        let mut config = AppConfig::default();
        config.translation.request_timeout_secs = 0;

        assert!(errors_for(&config).iter().any(|e| matches!(
            e,
            ConfigValidationError::NonPositiveTimeout { name, .. }
                if name == "translation.request_timeout_secs"
        )));
    }

    #[test]
    fn test_target_language_must_differ_from_source() {
        let mut config = AppConfig::default();
        config.translation.default_target_language = "ja_XX".to_string();

        assert!(errors_for(&config)
            .iter()
            .any(|e| matches!(e, ConfigValidationError::TargetIsSource { .. })));
    }

    #[test]
    fn test_malformed_and_unsupported_languages() {
        let mut config = AppConfig::default();
        config.translation.source_language = "japanese".to_string();
        config.translation.default_target_language = "xx_YY".to_string();

        let errors = errors_for(&config);
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigValidationError::InvalidLanguageCode { value, .. } if value == "japanese"
        )));
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigValidationError::UnsupportedLanguage { value, .. } if value == "xx_YY"
        )));
    }

    #[test]
    fn test_zero_max_new_tokens() {
        let mut config = AppConfig::default();
        config.translation.max_new_tokens = 0;

        assert!(errors_for(&config)
            .iter()
            .any(|e| matches!(e, ConfigValidationError::InvalidMaxNewTokens)));
    }

    #[test]
    fn test_invalid_observability() {
        let mut config = AppConfig::default();
        config.observability.log_level = "verbose".to_string();
        config.observability.log_format = "xml".to_string();
        config.observability.sampling_ratio = 1.5;
        config.observability.otlp_endpoint = Some("::".to_string());

        let errors = errors_for(&config);
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_format_validation_errors() {
        let errors = vec![
            ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: 0,
            },
            ConfigValidationError::InvalidMaxNewTokens,
        ];

        let output = format_validation_errors(&errors);
        assert!(output.contains("1. Invalid port"));
        assert!(output.contains("2. translation.max_new_tokens"));
    }
}
