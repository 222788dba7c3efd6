//! Configuration loader with layered sources.

use crate::validation::{format_validation_errors, ConfigValidator};
use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use menu_core::MenuError;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment variable overrides, e.g. `MENU_SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "MENU";

/// Configuration loader over one directory of TOML layers.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a loader for `config_dir`.
    pub fn new(config_dir: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Loader for the default location (`./config`).
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Loads and validates the configuration.
    ///
    /// Sources are applied in order:
    /// 1. `default.toml` - Default values
    /// 2. `{environment}.toml` - Environment-specific overrides
    /// 3. `local.toml` - Uncommitted local overrides
    /// 4. Environment variables with `MENU_` prefix
    pub fn load(&self) -> Result<AppConfig, MenuError> {
        Self::load_config(&self.config_dir)
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, MenuError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("MENU_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config layer from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_menu_error)?;

        ConfigValidator::validate(&app_config)
            .map_err(|errors| MenuError::Configuration(format_validation_errors(&errors)))?;

        Ok(app_config)
    }
}

fn config_error_to_menu_error(err: ConfigError) -> MenuError {
    MenuError::Configuration(err.to_string())
}
