//! Router tests driven through `tower::ServiceExt::oneshot`.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use menu_config::{ObservabilityConfig, ServerConfig};
use menu_core::{
    HealthCheck, HealthStatus, LanguageCatalog, LanguageInfo, MenuError, MenuResult,
    TranslationKey,
};
use menu_rest::{create_router, AppState};
use menu_service::TranslationService;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Service stub that uppercases text and records the keys it saw.
#[derive(Default)]
struct StubTranslationService {
    calls: Mutex<Vec<TranslationKey>>,
    invalidated: Mutex<Vec<(String, u32)>>,
}

impl StubTranslationService {
    fn calls(&self) -> Vec<TranslationKey> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationService for StubTranslationService {
    async fn translate(&self, text: &str, key: &TranslationKey) -> MenuResult<String> {
        self.calls.lock().unwrap().push(key.clone());
        Ok(format!("[{}] {}", key.target_language, text))
    }

    fn list_supported_languages(&self) -> Vec<LanguageInfo> {
        LanguageCatalog::entries()
    }

    fn display_name(&self, code: &str) -> Option<String> {
        LanguageCatalog::display_name(code).map(str::to_string)
    }

    async fn invalidate(&self, content_type: &str, object_id: u32) -> MenuResult<u64> {
        if object_id == 0 {
            return Err(MenuError::validation("object_id must be a positive integer"));
        }
        self.invalidated
            .lock()
            .unwrap()
            .push((content_type.to_string(), object_id));
        Ok(3)
    }
}

struct StaticHealth(HealthStatus);

#[async_trait]
impl HealthCheck for StaticHealth {
    fn name(&self) -> &str {
        "database"
    }

    async fn check(&self) -> HealthStatus {
        self.0.clone()
    }
}

fn app_with(state: AppState) -> Router {
    create_router(state, &ServerConfig::default(), &ObservabilityConfig::default())
}

fn app() -> (Router, Arc<StubTranslationService>) {
    let service = Arc::new(StubTranslationService::default());
    let state = AppState::new(service.clone())
        .with_health_check(Arc::new(StaticHealth(HealthStatus::Healthy)));
    (app_with(state), service)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_endpoints() {
    let (app, _) = app();

    let (status, body) = send(app.clone(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(app.clone(), get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["components"][0]["name"], "database");

    let (status, _) = send(app, get("/live")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_ready_fails_when_database_is_down() {
    let state = AppState::new(Arc::new(StubTranslationService::default())).with_health_check(
        Arc::new(StaticHealth(HealthStatus::Unhealthy("pool closed".to_string()))),
    );

    let (status, body) = send(app_with(state), get("/ready")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["components"][0]["message"], "pool closed");
}

#[tokio::test]
async fn test_list_languages() {
    let (app, _) = app();

    let (status, body) = send(app, get("/api/v1/languages")).await;

    assert_eq!(status, StatusCode::OK);
    let languages = body["data"].as_array().unwrap();
    assert_eq!(languages.len(), LanguageCatalog::len());
    assert_eq!(languages[0]["code"], "ar_AR");
}

#[tokio::test]
async fn test_get_language() {
    let (app, _) = app();

    let (status, body) = send(app.clone(), get("/api/v1/languages/ja_XX")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "日本語");
    assert_eq!(body["data"]["flag"], "un");

    let (status, body) = send(app, get("/api/v1/languages/xx_YY")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_translate_with_defaults() {
    let (app, service) = app();

    let (status, body) = send(
        app,
        post_json(
            "/api/v1/translations",
            json!({"text": "牛ステーキ", "object_id": 1, "field": "name"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["original"], "牛ステーキ");
    assert_eq!(body["data"]["translated"], "[en_XX] 牛ステーキ");
    assert_eq!(body["data"]["language"], "en_XX");
    assert_eq!(service.calls(), vec![TranslationKey::menu_item(1, "name", "en_XX")]);
}

#[tokio::test]
async fn test_translate_uses_configured_default_language() {
    let service = Arc::new(StubTranslationService::default());
    let state = AppState::new(service.clone()).with_default_target_language("fr_XX");

    let (status, body) = send(
        app_with(state),
        post_json(
            "/api/v1/translations",
            json!({"text": "寿司", "object_id": 3, "field": "name"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["translated"], "[fr_XX] 寿司");
    assert_eq!(body["data"]["language"], "fr_XX");
    assert_eq!(service.calls(), vec![TranslationKey::menu_item(3, "name", "fr_XX")]);
}

#[tokio::test]
async fn test_translate_into_source_language_skips_service() {
    let (app, service) = app();

    let (status, body) = send(
        app,
        post_json(
            "/api/v1/translations",
            json!({"text": "寿司", "object_id": 2, "field": "name", "lang": "ja_XX"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["translated"], "寿司");
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn test_translate_unsupported_language_is_bad_request() {
    let (app, service) = app();

    let (status, body) = send(
        app,
        post_json(
            "/api/v1/translations",
            json!({"text": "寿司", "object_id": 2, "field": "name", "lang": "xx_YY"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn test_translate_blank_field_is_unprocessable() {
    let (app, _) = app();

    let (status, body) = send(
        app,
        post_json(
            "/api/v1/translations",
            json!({"text": "寿司", "object_id": 2, "field": ""}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"][0]["field"], "field");
}

#[tokio::test]
async fn test_translate_invalid_json_is_bad_request() {
    let (app, _) = app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/translations")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_JSON");
}

#[tokio::test]
async fn test_invalidate_object() {
    let (app, service) = app();

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/v1/translations/menu_item/5")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deleted"], 3);
    assert_eq!(
        *service.invalidated.lock().unwrap(),
        vec![("menu_item".to_string(), 5)]
    );
}

#[tokio::test]
async fn test_invalidate_rejects_zero_object_id() {
    let (app, _) = app();

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/v1/translations/menu_item/0")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_metrics_endpoint_only_when_enabled() {
    let (app, _) = app();
    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let handle = PrometheusBuilder::new().build_recorder().handle();
    let state = AppState::new(Arc::new(StubTranslationService::default())).with_metrics(handle);
    let response = app_with(state).oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (app, _) = app();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}
