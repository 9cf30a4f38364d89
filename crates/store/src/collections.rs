//! Collection access traits; each backend implements all three.
//!
//! The traits expose exactly the queries the route handlers need (exact
//! matches and full scans), so a backend never has to support ad-hoc
//! filtering.

use async_trait::async_trait;
use fitclub_core::RecordId;

use crate::error::StoreError;
use crate::models::{Contact, Payment, User};

/// The `users` collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Exact-match lookup by email (signup duplicate check).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Exact-match lookup by email AND plaintext password (login).
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError>;

    async fn insert(&self, user: &User) -> Result<(), StoreError>;
}

/// The `payments` collection, keyed by the caller-supplied record id.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn get(&self, id: &RecordId) -> Result<Option<Payment>, StoreError>;

    async fn insert(&self, payment: &Payment) -> Result<(), StoreError>;

    /// Overwrite the record carrying the same id.
    async fn replace(&self, payment: &Payment) -> Result<(), StoreError>;

    /// Full scan in insertion order.
    async fn list(&self) -> Result<Vec<Payment>, StoreError>;
}

/// The `contacts` collection.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert(&self, contact: &Contact) -> Result<(), StoreError>;

    /// Full scan in insertion order.
    async fn list(&self) -> Result<Vec<Contact>, StoreError>;
}
