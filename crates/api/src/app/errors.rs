use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

/// Fixed-message JSON response, the shape every route replies with.
pub fn json_message(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 500 response that also echoes the underlying error text.
///
/// Only the plan-by-id route does this; everything else sticks to its fixed
/// message.
pub fn server_error_with_detail(detail: impl std::fmt::Display) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({
            "message": "Server error",
            "error": detail.to_string(),
        })),
    )
        .into_response()
}
