//! JSON body extractor that runs `validator` rules after deserializing.
//!
//! Malformed JSON is a 400. A body that parses but breaks a rule is a 422
//! carrying one [`FieldError`] per violated rule.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use menu_core::{ErrorResponse, FieldError, MenuError};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// A `Json<T>` whose contents already passed `T::validate`.
///
/// ```ignore
/// async fn translate(ValidatedJson(request): ValidatedJson<TranslateRequest>) {
///     // request.field is a well-formed key segment here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Why a [`ValidatedJson`] could not be extracted.
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// The body was missing, not JSON, or did not match `T`.
    Malformed(JsonRejection),
    /// The body parsed but broke at least one rule.
    Invalid(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Malformed(rejection) => {
                let error = MenuError::validation(rejection.body_text());
                let mut body = ErrorResponse::from_error(&error);
                body.code = "INVALID_JSON".to_string();
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::Invalid(errors) => {
                let error = MenuError::validation("Request validation failed");
                let body = ErrorResponse::from_error(&error).with_details(field_errors(&errors));
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}

/// Flattens rule violations into API field errors, sorted by field name.
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, violations)| {
            violations.iter().map(move |violation| FieldError {
                field: field.to_string(),
                message: violation
                    .message
                    .as_ref()
                    .map_or_else(|| format!("'{}' is invalid", field), ToString::to_string),
                code: violation.code.to_string(),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Malformed)?;

        value.validate().map_err(ValidatedJsonRejection::Invalid)?;

        Ok(Self(value))
    }
}
