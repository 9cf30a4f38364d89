use serde::Deserialize;

use fitclub_store::{Contact, Payment, User};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub number: String,
    pub plan: String,
    pub amount: f64,
    /// Tolerated as absent; the handler turns a missing id into the same
    /// handled failure as a malformed one.
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    // Absent fields compare as empty strings and fall through to 401.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub number: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// User record as the login response exposes it: everything but the
/// password.
pub fn user_to_json(user: &User) -> serde_json::Value {
    serde_json::json!({
        "_id": user.id.as_str(),
        "name": user.name,
        "email": user.email,
    })
}

pub fn payment_to_json(payment: &Payment) -> serde_json::Value {
    serde_json::json!({
        "_id": payment.id.as_str(),
        "firstName": payment.first_name,
        "lastName": payment.last_name,
        "email": payment.email,
        "number": payment.number,
        "plan": payment.plan,
        "amount": payment.amount,
        "date": payment.date,
        "time": payment.time,
    })
}

pub fn contact_to_json(contact: &Contact) -> serde_json::Value {
    serde_json::json!({
        "_id": contact.id.as_str(),
        "firstName": contact.first_name,
        "lastName": contact.last_name,
        "email": contact.email,
        "number": contact.number,
        "date": contact.date,
        "time": contact.time,
    })
}
