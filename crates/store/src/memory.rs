//! In-memory backend for tests/dev.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use fitclub_core::RecordId;

use crate::collections::{ContactStore, PaymentStore, UserStore};
use crate::error::StoreError;
use crate::models::{Contact, Payment, User};

/// All three collections behind plain vectors, preserving insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    payments: RwLock<Vec<Payment>>,
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T>(lock: &RwLock<Vec<T>>) -> Result<RwLockReadGuard<'_, Vec<T>>, StoreError> {
    lock.read().map_err(|_| StoreError::Poisoned)
}

fn write<T>(lock: &RwLock<Vec<T>>) -> Result<RwLockWriteGuard<'_, Vec<T>>, StoreError> {
    lock.write().map_err(|_| StoreError::Poisoned)
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = read(&self.users)?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let users = read(&self.users)?;
        Ok(users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        write(&self.users)?.push(user.clone());
        Ok(())
    }
}

#[async_trait]
impl PaymentStore for InMemoryStore {
    async fn get(&self, id: &RecordId) -> Result<Option<Payment>, StoreError> {
        let payments = read(&self.payments)?;
        Ok(payments.iter().find(|p| p.id == *id).cloned())
    }

    async fn insert(&self, payment: &Payment) -> Result<(), StoreError> {
        write(&self.payments)?.push(payment.clone());
        Ok(())
    }

    async fn replace(&self, payment: &Payment) -> Result<(), StoreError> {
        let mut payments = write(&self.payments)?;
        if let Some(slot) = payments.iter_mut().find(|p| p.id == payment.id) {
            *slot = payment.clone();
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Payment>, StoreError> {
        Ok(read(&self.payments)?.clone())
    }
}

#[async_trait]
impl ContactStore for InMemoryStore {
    async fn insert(&self, contact: &Contact) -> Result<(), StoreError> {
        write(&self.contacts)?.push(contact.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(read(&self.contacts)?.clone())
    }
}
