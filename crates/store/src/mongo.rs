//! MongoDB backend.
//!
//! Documents are stored the way the club's frontend expects to read them
//! back: `_id` as a native object id, remaining keys camelCase. The wire
//! structs below own that mapping so the record types stay driver-free.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use fitclub_core::RecordId;

use crate::collections::{ContactStore, PaymentStore, UserStore};
use crate::error::StoreError;
use crate::models::{Contact, Payment, User};

/// Database name used when the connection string does not carry one.
pub const DEFAULT_DATABASE: &str = "FitnessClub";

/// Handles to the three collections, sharing one client under the hood.
///
/// Built once at startup and held for the life of the process; the driver
/// pools connections internally, so cloning collection handles is cheap.
#[derive(Clone)]
pub struct MongoStore {
    users: Collection<UserDoc>,
    payments: Collection<PaymentDoc>,
    contacts: Collection<ContactDoc>,
}

impl MongoStore {
    /// Connect using a MongoDB URI; the URI's database path selects the
    /// database, falling back to [`DEFAULT_DATABASE`].
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        tracing::debug!(database = db.name(), "document store selected");
        Ok(Self::new(db))
    }

    pub fn new(db: Database) -> Self {
        Self {
            users: db.collection("users"),
            payments: db.collection("payments"),
            contacts: db.collection("contacts"),
        }
    }
}

fn object_id(id: &RecordId) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id.as_str()).map_err(|_| StoreError::InvalidId(id.to_string()))
}

fn record_id(oid: &ObjectId) -> RecordId {
    RecordId::from_bytes(oid.bytes())
}

#[derive(Debug, Serialize, Deserialize)]
struct UserDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    email: String,
    password: String,
}

impl UserDoc {
    fn from_record(user: &User) -> Result<Self, StoreError> {
        Ok(Self {
            id: object_id(&user.id)?,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        })
    }

    fn into_record(self) -> User {
        User {
            id: record_id(&self.id),
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    first_name: String,
    last_name: String,
    email: String,
    number: String,
    plan: String,
    amount: f64,
    date: String,
    time: String,
}

impl PaymentDoc {
    fn from_record(payment: &Payment) -> Result<Self, StoreError> {
        Ok(Self {
            id: object_id(&payment.id)?,
            first_name: payment.first_name.clone(),
            last_name: payment.last_name.clone(),
            email: payment.email.clone(),
            number: payment.number.clone(),
            plan: payment.plan.clone(),
            amount: payment.amount,
            date: payment.date.clone(),
            time: payment.time.clone(),
        })
    }

    fn into_record(self) -> Payment {
        Payment {
            id: record_id(&self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            number: self.number,
            plan: self.plan,
            amount: self.amount,
            date: self.date,
            time: self.time,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    first_name: String,
    last_name: String,
    email: String,
    number: String,
    date: String,
    time: String,
}

impl ContactDoc {
    fn from_record(contact: &Contact) -> Result<Self, StoreError> {
        Ok(Self {
            id: object_id(&contact.id)?,
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.clone(),
            number: contact.number.clone(),
            date: contact.date.clone(),
            time: contact.time.clone(),
        })
    }

    fn into_record(self) -> Contact {
        Contact {
            id: record_id(&self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            number: self.number,
            date: self.date,
            time: self.time,
        }
    }
}

#[async_trait]
impl UserStore for MongoStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let found = self.users.find_one(doc! { "email": email }).await?;
        Ok(found.map(UserDoc::into_record))
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let found = self
            .users
            .find_one(doc! { "email": email, "password": password })
            .await?;
        Ok(found.map(UserDoc::into_record))
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.users.insert_one(UserDoc::from_record(user)?).await?;
        Ok(())
    }
}

#[async_trait]
impl PaymentStore for MongoStore {
    async fn get(&self, id: &RecordId) -> Result<Option<Payment>, StoreError> {
        let found = self.payments.find_one(doc! { "_id": object_id(id)? }).await?;
        Ok(found.map(PaymentDoc::into_record))
    }

    async fn insert(&self, payment: &Payment) -> Result<(), StoreError> {
        self.payments
            .insert_one(PaymentDoc::from_record(payment)?)
            .await?;
        Ok(())
    }

    async fn replace(&self, payment: &Payment) -> Result<(), StoreError> {
        let replacement = PaymentDoc::from_record(payment)?;
        self.payments
            .replace_one(doc! { "_id": replacement.id }, &replacement)
            .await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Payment>, StoreError> {
        let cursor = self.payments.find(doc! {}).await?;
        let docs: Vec<PaymentDoc> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(PaymentDoc::into_record).collect())
    }
}

#[async_trait]
impl ContactStore for MongoStore {
    async fn insert(&self, contact: &Contact) -> Result<(), StoreError> {
        self.contacts
            .insert_one(ContactDoc::from_record(contact)?)
            .await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let cursor = self.contacts.find(doc! {}).await?;
        let docs: Vec<ContactDoc> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(ContactDoc::into_record).collect())
    }
}
