use axum::{Json, http::StatusCode, response::IntoResponse};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Greeting probe the frontend pings on load. The text (typo included) is
/// part of the deployed contract.
pub async fn popup() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "msg": "hello this my frist api" })),
    )
}
