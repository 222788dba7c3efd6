//! Tests for HttpTranslationEngine against a mock inference service.

use menu_config::TranslationConfig;
use menu_service::{EngineError, HttpTranslationEngine, TranslationEngine};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn engine_for(server: &MockServer) -> HttpTranslationEngine {
    let config = TranslationConfig {
        engine_url: server.uri(),
        request_timeout_secs: 2,
        ..TranslationConfig::default()
    };
    HttpTranslationEngine::new(&config).expect("Failed to build engine")
}

#[tokio::test]
async fn test_translate_sends_expected_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_json(json!({
            "text": "牛ステーキ",
            "src_lang": "ja_XX",
            "tgt_lang": "en_XX",
            "max_new_tokens": 50
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"translation": "Beef Steak"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = engine_for(&server).translate("牛ステーキ", "en_XX").await;

    assert_eq!(result, Ok("Beef Steak".to_string()));
}

#[tokio::test]
async fn test_unsupported_language_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"translation": "?"})))
        .expect(0)
        .mount(&server)
        .await;

    let result = engine_for(&server).translate("こんにちは", "xx_YY").await;

    assert_eq!(result, Err(EngineError::UnsupportedLanguage("xx_YY".to_string())));
}

#[tokio::test]
async fn test_service_unavailable_maps_to_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = engine_for(&server).translate("寿司", "fr_XX").await;

    assert!(matches!(result, Err(EngineError::Unavailable(_))));
}

#[tokio::test]
async fn test_other_error_status_maps_to_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("CUDA out of memory"))
        .mount(&server)
        .await;

    let result = engine_for(&server).translate("寿司", "fr_XX").await;

    match result {
        Err(EngineError::Request(message)) => assert!(message.contains("CUDA out of memory")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"output": "Sushi"})))
        .mount(&server)
        .await;

    let result = engine_for(&server).translate("寿司", "en_XX").await;

    assert!(matches!(result, Err(EngineError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_slow_engine_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"translation": "Sushi"}))
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = TranslationConfig {
        engine_url: server.uri(),
        request_timeout_secs: 1,
        ..TranslationConfig::default()
    };
    let engine = HttpTranslationEngine::new(&config).unwrap();

    let result = engine.translate("寿司", "en_XX").await;

    assert_eq!(result, Err(EngineError::Timeout(1_000)));
}

#[tokio::test]
async fn test_unreachable_engine_is_reported() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let config = TranslationConfig {
        engine_url: uri,
        ..TranslationConfig::default()
    };
    let engine = HttpTranslationEngine::new(&config).unwrap();

    let result = engine.translate("寿司", "en_XX").await;

    assert!(matches!(
        result,
        Err(EngineError::Unavailable(_) | EngineError::Request(_))
    ));
}
