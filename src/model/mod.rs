//! # Yeti Model
//!
//! The Yeti record, candidate validation, and password hashing.

pub mod candidate;
pub mod crypto;
pub mod errors;
pub mod yeti;

pub use candidate::{Candidate, FieldError, FieldName, FieldReason, ValidationReport};
pub use errors::{YetiError, YetiResult};
pub use yeti::{NewYeti, Yeti};

use crate::store::YetiRepository;

/// Validate a candidate and admit it to the store.
///
/// The plaintext password never reaches the store: the Argon2id digest is
/// derived here, after validation passes. The store re-checks email
/// uniqueness under its own lock, so a concurrent insert that slipped past
/// the validation pre-check still fails with [`YetiError::EmailTaken`].
pub fn create_yeti(candidate: &Candidate, store: &dyn YetiRepository) -> YetiResult<Yeti> {
    candidate.validate(store)?.into_result()?;
    store.insert(NewYeti::from_candidate(candidate)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryYetiRepository, YetiRepository};

    fn valid_candidate() -> Candidate {
        Candidate {
            name: "new yeti".to_string(),
            email: "foo@example.com".to_string(),
            password: "abc123".to_string(),
            password_confirmation: Some("abc123".to_string()),
        }
    }

    #[test]
    fn test_create_yeti_persists_digest_not_plaintext() {
        let store = InMemoryYetiRepository::new();
        let yeti = create_yeti(&valid_candidate(), &store).unwrap();

        assert!(!yeti.password_digest.is_empty());
        assert_ne!(yeti.password_digest, "abc123");
        assert!(yeti.verify_password("abc123").unwrap());
    }

    #[test]
    fn test_create_yeti_rejects_invalid_candidate() {
        let store = InMemoryYetiRepository::new();
        let candidate = Candidate {
            name: String::new(),
            ..valid_candidate()
        };

        let err = create_yeti(&candidate, &store).unwrap_err();
        assert!(matches!(err, YetiError::Invalid(_)));
        assert_eq!(store.count().unwrap(), 0);
    }
}
