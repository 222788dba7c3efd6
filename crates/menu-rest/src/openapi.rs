//! OpenAPI documentation configuration.

use crate::controllers::health_controller::{ComponentHealth, HealthResponse, ReadinessResponse};
use menu_core::{ErrorResponse, FieldError, LanguageInfo};
use menu_service::{InvalidateResponse, TranslateRequest, TranslateResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the menu translation API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Menu Translation API",
        version = "1.0.0",
        description = "Cached machine translation of restaurant menu content",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::language_controller::list_languages,
        crate::controllers::language_controller::get_language,
        crate::controllers::translation_controller::translate,
        crate::controllers::translation_controller::invalidate,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            LanguageInfo,
            TranslateRequest,
            TranslateResponse,
            InvalidateResponse,
            HealthResponse,
            ReadinessResponse,
            ComponentHealth,
        )
    ),
    tags(
        (name = "translations", description = "Cached translation endpoints"),
        (name = "languages", description = "Supported language catalog"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
