//! Record types for the three collections.
//!
//! Field names follow the wire layout (`_id` plus camelCase keys in JSON);
//! the API layer owns the JSON mapping, the backends own the document
//! mapping.

use fitclub_core::RecordId;

/// Club member account.
///
/// The password is kept verbatim and compared with exact equality at login;
/// there is no hashing anywhere in this system.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A member's recorded payment plan.
///
/// At most one record per id, enforced by the payment route's upsert: on
/// resubmission the six mutable fields are overwritten in place while
/// `date`/`time` keep their insertion values.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub number: String,
    pub plan: String,
    pub amount: f64,
    pub date: String,
    pub time: String,
}

/// Contact-form submission. Duplicates allowed; never updated.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub number: String,
    pub date: String,
    pub time: String,
}
