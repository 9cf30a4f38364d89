//! `fitclub-store` — persistence layer over the club's three collections.
//!
//! One trait per collection (`users`, `payments`, `contacts`), with an
//! in-memory backend for dev/test and a MongoDB backend for production.
//! All operations are exact-match point reads/writes or full scans; there
//! are no transactions and no storage-level constraints.

pub mod collections;
pub mod error;
pub mod memory;
pub mod models;
pub mod mongo;

pub use collections::{ContactStore, PaymentStore, UserStore};
pub use error::StoreError;
pub use memory::InMemoryStore;
pub use models::{Contact, Payment, User};
pub use mongo::MongoStore;
