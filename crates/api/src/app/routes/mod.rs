use axum::{
    Router,
    routing::{get, post},
};

pub mod admin;
pub mod contacts;
pub mod payments;
pub mod system;
pub mod users;

/// Router for the public REST surface.
///
/// Paths are flat (the frontend addresses them verbatim) rather than nested
/// per resource.
pub fn router() -> Router {
    Router::new()
        .route("/popup", get(system::popup))
        .route("/signup", post(users::signup))
        .route("/login", post(users::login))
        .route(
            "/api/payment",
            post(payments::submit_payment).get(payments::list_payments),
        )
        .route("/api/admin-login", post(admin::admin_login))
        .route(
            "/api/contact",
            post(contacts::submit_contact).get(contacts::list_contacts),
        )
        .route("/api/userPlan/:userId", get(payments::get_user_plan))
}
