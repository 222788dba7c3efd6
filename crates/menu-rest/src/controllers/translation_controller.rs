//! Translation controller.

use crate::{
    extractors::ValidatedJson,
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{delete, post},
    Router,
};
use menu_core::{LanguageCatalog, MenuError};
use menu_service::{InvalidateResponse, TranslateRequest, TranslateResponse};
use tracing::debug;

/// Creates the translation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(translate))
        .route("/:content_type/:object_id", delete(invalidate))
}

/// Translate one field of a menu entity, served from the cache when possible.
///
/// When the engine fails the original text comes back unchanged.
#[utoipa::path(
    post,
    path = "/translations",
    context_path = "/api/v1",
    tag = "translations",
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Translated text, or the original on engine failure", body = TranslateResponse),
        (status = 400, description = "Unsupported language", body = menu_core::ErrorResponse),
        (status = 422, description = "Malformed request", body = menu_core::ErrorResponse)
    )
)]
pub async fn translate(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TranslateRequest>,
) -> ApiResult<TranslateResponse> {
    let lang = request
        .target_language(&state.default_target_language)
        .to_string();
    debug!(
        "Translate request: {}:{}:{} -> {}",
        request.content_type, request.object_id, request.field, lang
    );

    if !LanguageCatalog::is_supported(&lang) {
        return Err(MenuError::validation(format!("Unsupported language: {}", lang)).into());
    }

    let translated = if lang == state.source_language {
        request.text.clone()
    } else {
        state
            .translation_service
            .translate(&request.text, &request.key(&lang))
            .await?
    };

    ok(TranslateResponse {
        original: request.text,
        translated,
        language: lang,
    })
}

/// Drop every cached translation of one source entity.
#[utoipa::path(
    delete,
    path = "/translations/{content_type}/{object_id}",
    context_path = "/api/v1",
    tag = "translations",
    params(
        ("content_type" = String, Path, description = "Kind of source entity, e.g. menu_item"),
        ("object_id" = u32, Path, description = "Identifier of the source entity")
    ),
    responses(
        (status = 200, description = "Number of removed entries", body = InvalidateResponse),
        (status = 400, description = "Malformed target", body = menu_core::ErrorResponse)
    )
)]
pub async fn invalidate(
    State(state): State<AppState>,
    Path((content_type, object_id)): Path<(String, u32)>,
) -> ApiResult<InvalidateResponse> {
    debug!("Invalidate request: {}:{}", content_type, object_id);

    let deleted = state
        .translation_service
        .invalidate(&content_type, object_id)
        .await?;

    ok(InvalidateResponse { deleted })
}
