//! # Yeti Record
//!
//! The persisted yeti and the pre-insert form the store admits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::candidate::Candidate;
use super::crypto::{hash_password, verify_password};
use super::errors::YetiResult;

/// A persisted yeti. Owned exclusively by the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Yeti {
    /// Unique identifier, assigned by the store on insert, immutable
    pub id: Uuid,

    /// Display name (required, non-unique)
    pub name: String,

    /// Email address (required, unique, case-sensitive as stored)
    pub email: String,

    /// Argon2id digest of the password (never plaintext)
    #[serde(skip_serializing, default)]
    pub password_digest: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl Yeti {
    /// Verify a password against this yeti's stored digest
    pub fn verify_password(&self, password: &str) -> YetiResult<bool> {
        verify_password(password, &self.password_digest)
    }
}

/// Field values for a record the store has not admitted yet.
///
/// The store assigns `id` and timestamps on insert.
#[derive(Debug, Clone)]
pub struct NewYeti {
    pub name: String,
    pub email: String,
    pub password_digest: String,
}

impl NewYeti {
    /// Build from a validated candidate, deriving the password digest.
    pub fn from_candidate(candidate: &Candidate) -> YetiResult<Self> {
        Ok(Self {
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            password_digest: hash_password(&candidate.password)?,
        })
    }
}
