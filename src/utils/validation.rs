use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use validator::{Validate, ValidationErrors};

pub fn validate<T: Validate>(payload: &T) -> Result<(), ValidationErrors> {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {}", errors);
        errors
    })
}

pub fn into_response(errors: ValidationErrors) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
}
