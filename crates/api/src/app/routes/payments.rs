//! Payment-plan submission and lookup.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use fitclub_core::{InsertStamp, RecordId};
use fitclub_store::Payment;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Upsert keyed by the caller's member id.
///
/// An existing record has its six mutable fields overwritten in place;
/// `date`/`time` keep their insertion values. Two concurrent submissions
/// with the same id race last-write-wins.
pub async fn submit_payment(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::PaymentRequest>,
) -> axum::response::Response {
    let id = match body.user_id.as_deref().map(|raw| raw.parse::<RecordId>()) {
        Some(Ok(id)) => id,
        Some(Err(e)) => {
            tracing::warn!("payment rejected: {e}");
            return errors::json_message(StatusCode::INTERNAL_SERVER_ERROR, "Error saving data");
        }
        None => {
            tracing::warn!("payment rejected: missing userId");
            return errors::json_message(StatusCode::INTERNAL_SERVER_ERROR, "Error saving data");
        }
    };

    match services.payments.get(&id).await {
        Ok(Some(mut existing)) => {
            existing.first_name = body.first_name;
            existing.last_name = body.last_name;
            existing.email = body.email;
            existing.number = body.number;
            existing.plan = body.plan;
            existing.amount = body.amount;

            match services.payments.replace(&existing).await {
                Ok(()) => errors::json_message(StatusCode::OK, "Payment updated successfully!"),
                Err(e) => {
                    tracing::error!("payment update failed: {e}");
                    errors::json_message(StatusCode::INTERNAL_SERVER_ERROR, "Error saving data")
                }
            }
        }
        Ok(None) => {
            let stamp = InsertStamp::now();
            let payment = Payment {
                id,
                first_name: body.first_name,
                last_name: body.last_name,
                email: body.email,
                number: body.number,
                plan: body.plan,
                amount: body.amount,
                date: stamp.date,
                time: stamp.time,
            };

            match services.payments.insert(&payment).await {
                Ok(()) => errors::json_message(StatusCode::CREATED, "Payment successful!"),
                Err(e) => {
                    tracing::error!("payment insert failed: {e}");
                    errors::json_message(StatusCode::INTERNAL_SERVER_ERROR, "Error saving data")
                }
            }
        }
        Err(e) => {
            tracing::error!("payment lookup failed: {e}");
            errors::json_message(StatusCode::INTERNAL_SERVER_ERROR, "Error saving data")
        }
    }
}

pub async fn list_payments(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.payments.list().await {
        Ok(payments) => {
            let items = payments.iter().map(dto::payment_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            tracing::error!("payment list failed: {e}");
            errors::json_message(StatusCode::INTERNAL_SERVER_ERROR, "Error fetching payments")
        }
    }
}

pub async fn get_user_plan(
    Extension(services): Extension<Arc<AppServices>>,
    Path(user_id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match user_id.parse() {
        Ok(id) => id,
        Err(e) => return errors::server_error_with_detail(e),
    };

    match services.payments.get(&id).await {
        Ok(Some(payment)) => {
            (StatusCode::OK, Json(dto::payment_to_json(&payment))).into_response()
        }
        Ok(None) => errors::json_message(StatusCode::NOT_FOUND, "Plan not found"),
        Err(e) => {
            tracing::error!("plan lookup failed: {e}");
            errors::server_error_with_detail(e)
        }
    }
}
