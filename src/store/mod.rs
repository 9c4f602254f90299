//! # Record Store
//!
//! Durable, uniquely-keyed collection of yeti records.
//!
//! The application-level email pre-check (in candidate validation) and the
//! store-level uniqueness constraint are independent layers. The store
//! performs its constraint check and the append under the same write lock,
//! so two concurrent inserts with the same email cannot both succeed even
//! when both passed the pre-check.

use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::model::{NewYeti, Yeti, YetiError, YetiResult};

/// Storage operations for yeti records
pub trait YetiRepository: Send + Sync {
    /// Admit a record, assigning a fresh unique id and timestamps.
    ///
    /// Fails with [`YetiError::EmailTaken`] if the email collides with an
    /// existing record. The uniqueness check and the insert are serialized.
    fn insert(&self, new: NewYeti) -> YetiResult<Yeti>;

    /// First record with this exact name, in insertion order
    fn find_by_name(&self, name: &str) -> YetiResult<Option<Yeti>>;

    /// Every persisted record, in insertion order
    fn all(&self) -> YetiResult<Vec<Yeti>>;

    /// Whether an email is already registered (the validation pre-check)
    fn email_exists(&self, email: &str) -> YetiResult<bool>;

    /// Number of persisted records
    fn count(&self) -> YetiResult<usize>;
}

/// In-memory yeti store. Vector order is insertion order.
#[derive(Debug, Default)]
pub struct InMemoryYetiRepository {
    yetis: RwLock<Vec<Yeti>>,
}

impl InMemoryYetiRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl YetiRepository for InMemoryYetiRepository {
    fn insert(&self, new: NewYeti) -> YetiResult<Yeti> {
        let mut yetis = self
            .yetis
            .write()
            .map_err(|_| YetiError::StorageError("Lock poisoned".to_string()))?;

        // Constraint check under the same lock as the append.
        if yetis.iter().any(|y| y.email == new.email) {
            return Err(YetiError::EmailTaken);
        }

        let now = Utc::now();
        let yeti = Yeti {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_digest: new.password_digest,
            created_at: now,
            updated_at: now,
        };

        yetis.push(yeti.clone());
        Ok(yeti)
    }

    fn find_by_name(&self, name: &str) -> YetiResult<Option<Yeti>> {
        let yetis = self
            .yetis
            .read()
            .map_err(|_| YetiError::StorageError("Lock poisoned".to_string()))?;
        Ok(yetis.iter().find(|y| y.name == name).cloned())
    }

    fn all(&self) -> YetiResult<Vec<Yeti>> {
        let yetis = self
            .yetis
            .read()
            .map_err(|_| YetiError::StorageError("Lock poisoned".to_string()))?;
        Ok(yetis.clone())
    }

    fn email_exists(&self, email: &str) -> YetiResult<bool> {
        let yetis = self
            .yetis
            .read()
            .map_err(|_| YetiError::StorageError("Lock poisoned".to_string()))?;
        Ok(yetis.iter().any(|y| y.email == email))
    }

    fn count(&self) -> YetiResult<usize> {
        let yetis = self
            .yetis
            .read()
            .map_err(|_| YetiError::StorageError("Lock poisoned".to_string()))?;
        Ok(yetis.len())
    }
}
