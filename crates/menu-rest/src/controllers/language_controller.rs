//! Language catalog controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use menu_core::{LanguageCatalog, LanguageInfo, MenuError};

/// Creates the language router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_languages))
        .route("/:code", get(get_language))
}

/// List the languages menu content can be translated into.
#[utoipa::path(
    get,
    path = "/languages",
    context_path = "/api/v1",
    tag = "languages",
    responses(
        (status = 200, description = "Supported languages in catalog order", body = [LanguageInfo])
    )
)]
pub async fn list_languages(State(state): State<AppState>) -> ApiResult<Vec<LanguageInfo>> {
    ok(state.translation_service.list_supported_languages())
}

/// Get one supported language.
#[utoipa::path(
    get,
    path = "/languages/{code}",
    context_path = "/api/v1",
    tag = "languages",
    params(("code" = String, Path, description = "Language code, e.g. en_XX")),
    responses(
        (status = 200, description = "Language found", body = LanguageInfo),
        (status = 404, description = "Language not supported", body = menu_core::ErrorResponse)
    )
)]
pub async fn get_language(Path(code): Path<String>) -> ApiResult<LanguageInfo> {
    let language =
        LanguageCatalog::find(&code).ok_or_else(|| MenuError::not_found("Language", &code))?;
    ok(language)
}
