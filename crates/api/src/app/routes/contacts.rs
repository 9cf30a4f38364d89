//! Contact-form intake.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use fitclub_core::{InsertStamp, RecordId};
use fitclub_store::Contact;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Insert unconditionally; no dedup or existence check.
pub async fn submit_contact(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ContactRequest>,
) -> axum::response::Response {
    let stamp = InsertStamp::now();
    let contact = Contact {
        id: RecordId::generate(),
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        number: body.number,
        date: stamp.date,
        time: stamp.time,
    };

    match services.contacts.insert(&contact).await {
        Ok(()) => errors::json_message(StatusCode::CREATED, "Contact form submitted successfully!"),
        Err(e) => {
            tracing::error!("contact insert failed: {e}");
            errors::json_message(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

pub async fn list_contacts(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.contacts.list().await {
        Ok(contacts) => {
            let items = contacts.iter().map(dto::contact_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            tracing::error!("contact list failed: {e}");
            errors::json_message(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}
