//! Member signup and login.
//!
//! Login returns the stored record (minus password) as the caller's only
//! proof of authentication; there is no session or token to issue.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use fitclub_core::RecordId;
use fitclub_store::User;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn signup(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SignupRequest>,
) -> axum::response::Response {
    let existing = match services.users.find_by_email(&body.email).await {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("signup lookup failed: {e}");
            return errors::json_message(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        }
    };

    if existing.is_some() {
        return errors::json_message(StatusCode::BAD_REQUEST, "User already exists.");
    }

    // Two concurrent signups with the same email can both reach this point;
    // there is no storage-level uniqueness backstop.
    let user = User {
        id: RecordId::generate(),
        name: body.name,
        email: body.email,
        password: body.password,
    };

    if let Err(e) = services.users.insert(&user).await {
        tracing::error!("signup insert failed: {e}");
        return errors::json_message(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
    }

    errors::json_message(StatusCode::CREATED, "Signup successful!")
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    match services
        .users
        .find_by_credentials(&body.email, &body.password)
        .await
    {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Login successful!",
                "user": dto::user_to_json(&user),
            })),
        )
            .into_response(),
        Ok(None) => errors::json_message(StatusCode::UNAUTHORIZED, "Invalid email or password"),
        Err(e) => {
            tracing::error!("login lookup failed: {e}");
            errors::json_message(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}
