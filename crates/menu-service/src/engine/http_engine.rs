//! Engine backed by a model inference service reachable over HTTP.

use super::{EngineError, TranslationEngine};
use async_trait::async_trait;
use menu_config::TranslationConfig;
use menu_core::{LanguageCatalog, MenuError, MenuResult};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Client of the inference service's `POST /translate` endpoint.
pub struct HttpTranslationEngine {
    client: Client,
    base_url: String,
    source_language: String,
    max_new_tokens: u32,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    src_lang: &'a str,
    tgt_lang: &'a str,
    max_new_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translation: String,
}

impl HttpTranslationEngine {
    /// Creates an engine client from configuration.
    pub fn new(config: &TranslationConfig) -> MenuResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .pool_max_idle_per_host(16)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| MenuError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config))
    }

    /// Creates an engine client around a preconfigured `reqwest` client.
    pub fn with_client(client: Client, config: &TranslationConfig) -> Self {
        Self {
            client,
            base_url: config.engine_url.trim_end_matches('/').to_string(),
            source_language: config.source_language.clone(),
            max_new_tokens: config.max_new_tokens,
            timeout: config.request_timeout(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport_error(&self, err: &reqwest::Error) -> EngineError {
        if err.is_timeout() {
            EngineError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
        } else if err.is_connect() {
            EngineError::Unavailable(err.to_string())
        } else {
            EngineError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl TranslationEngine for HttpTranslationEngine {
    fn name(&self) -> &str {
        "http"
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String, EngineError> {
        if !LanguageCatalog::is_supported(target_language) {
            return Err(EngineError::UnsupportedLanguage(target_language.to_string()));
        }

        debug!(
            "HTTP translate: {} -> {} ({} chars)",
            self.source_language,
            target_language,
            text.chars().count()
        );

        let request = TranslateRequest {
            text,
            src_lang: &self.source_language,
            tgt_lang: target_language,
            max_new_tokens: self.max_new_tokens,
        };

        let response = self
            .client
            .post(self.url("/translate"))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        match response.status() {
            status if status.is_success() => {
                let body: TranslateResponse = response
                    .json()
                    .await
                    .map_err(|e| EngineError::InvalidResponse(e.to_string()))?;
                Ok(body.translation)
            }
            StatusCode::SERVICE_UNAVAILABLE => Err(EngineError::Unavailable(format!(
                "engine returned {}",
                StatusCode::SERVICE_UNAVAILABLE
            ))),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(EngineError::Request(format!("engine returned {}: {}", status, body)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let config = TranslationConfig {
            engine_url: "http://inference:8001/".to_string(),
            ..TranslationConfig::default()
        };
        let engine = HttpTranslationEngine::new(&config).unwrap();
        assert_eq!(engine.url("/translate"), "http://inference:8001/translate");
        assert_eq!(engine.name(), "http");
    }

    #[tokio::test]
    async fn test_unsupported_language_is_rejected_locally() {
        // Nothing listens on this port; the call must not reach the network.
        let config = TranslationConfig {
            engine_url: "http://127.0.0.1:9".to_string(),
            ..TranslationConfig::default()
        };
        let engine = HttpTranslationEngine::new(&config).unwrap();

        let result = engine.translate("こんにちは", "xx_YY").await;

        assert_eq!(result, Err(EngineError::UnsupportedLanguage("xx_YY".to_string())));
    }
}
