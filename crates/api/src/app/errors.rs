use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stocktrack_core::InventoryError;

use crate::app::dto::InputError;

pub fn inventory_error_to_response(err: InventoryError) -> axum::response::Response {
    let (status, code) = if err.is_conflict() {
        (StatusCode::CONFLICT, "conflict")
    } else if err.is_validation() {
        (StatusCode::BAD_REQUEST, "validation_error")
    } else {
        (StatusCode::NOT_FOUND, "not_found")
    };

    tracing::debug!(kind = err.code(), "inventory request rejected: {err}");
    (
        status,
        axum::Json(json!({
            "error": code,
            "kind": err.code(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}

pub fn input_error_to_response(err: InputError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
}

/// Unreadable form bodies (wrong content type, undecodable fields) keep
/// axum's status but use the JSON error body.
pub fn form_rejection_to_response(rejection: FormRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_input", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
