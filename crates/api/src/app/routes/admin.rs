//! Static-credential admin login.
//!
//! A fixed username/password pair checked in application code; no storage
//! access, no token issuance, no rate limiting, no lockout.

use axum::{Json, http::StatusCode};

use crate::app::{dto, errors};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

pub async fn admin_login(Json(body): Json<dto::AdminLoginRequest>) -> axum::response::Response {
    if body.username == ADMIN_USERNAME && body.password == ADMIN_PASSWORD {
        errors::json_message(StatusCode::OK, "Admin logged in successfully!")
    } else {
        errors::json_message(StatusCode::UNAUTHORIZED, "Invalid admin credentials")
    }
}
