//! # Candidate Validation
//!
//! A candidate is an in-memory, not-yet-persisted yeti as submitted through
//! the creation form. Checks are evaluated independently rather than
//! short-circuited, so the report carries every failing field at once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::YetiRepository;

use super::errors::{YetiError, YetiResult};

/// Fields a candidate can fail validation on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::PasswordConfirmation => "password_confirmation",
        }
    }
}

/// Reason codes for a failing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldReason {
    /// Field was blank
    Required,
    /// Email is already registered to another record
    Taken,
    /// Confirmation does not equal the password
    Mismatch,
}

impl FieldReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldReason::Required => "required",
            FieldReason::Taken => "taken",
            FieldReason::Mismatch => "mismatch",
        }
    }
}

/// A (field, reason) pair describing one validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FieldName,
    pub reason: FieldReason,
}

impl FieldError {
    pub fn new(field: FieldName, reason: FieldReason) -> Self {
        Self { field, reason }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self.reason {
            FieldReason::Required => "can't be blank",
            FieldReason::Taken => "has already been taken",
            FieldReason::Mismatch => "doesn't match password",
        };
        write!(f, "{} {}", self.field.as_str(), message)
    }
}

/// Outcome of validating a candidate
///
/// Valid only when the failure set is empty.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    failures: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[FieldError] {
        &self.failures
    }

    /// Convert into a `Result`, surfacing the full failure set.
    pub fn into_result(self) -> YetiResult<()> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(YetiError::Invalid(self.failures))
        }
    }

    fn record(&mut self, field: FieldName, reason: FieldReason) {
        self.failures.push(FieldError::new(field, reason));
    }
}

/// A not-yet-persisted yeti submitted for validation
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Transient; used only at validation time, never persisted.
    #[serde(default)]
    pub password_confirmation: Option<String>,
}

impl Candidate {
    /// Decide whether this candidate may be admitted to the store.
    ///
    /// Pure over the candidate plus the current store snapshot (the email
    /// uniqueness pre-check). The store's own constraint remains the actual
    /// invariant enforcer under concurrent writers.
    pub fn validate(&self, store: &dyn YetiRepository) -> YetiResult<ValidationReport> {
        let mut report = ValidationReport::default();

        if self.name.is_empty() {
            report.record(FieldName::Name, FieldReason::Required);
        }

        if self.email.is_empty() {
            report.record(FieldName::Email, FieldReason::Required);
        } else if store.email_exists(&self.email)? {
            report.record(FieldName::Email, FieldReason::Taken);
        }

        if self.password.is_empty() {
            report.record(FieldName::Password, FieldReason::Required);
        }

        // Confirmation is optional; when supplied non-empty it must match.
        if let Some(confirmation) = self.password_confirmation.as_deref() {
            if !confirmation.is_empty() && confirmation != self.password {
                report.record(FieldName::PasswordConfirmation, FieldReason::Mismatch);
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryYetiRepository;

    // One builder per cleared field, instead of a generic field-nulling
    // helper dispatching on field names.

    fn valid_candidate() -> Candidate {
        Candidate {
            name: "new yeti".to_string(),
            email: "foo@example.com".to_string(),
            password: "abc123".to_string(),
            password_confirmation: Some("abc123".to_string()),
        }
    }

    fn candidate_without_name() -> Candidate {
        Candidate {
            name: String::new(),
            ..valid_candidate()
        }
    }

    fn candidate_without_email() -> Candidate {
        Candidate {
            email: String::new(),
            ..valid_candidate()
        }
    }

    fn candidate_without_password() -> Candidate {
        Candidate {
            password: String::new(),
            ..valid_candidate()
        }
    }

    fn candidate_with_wrong_confirmation() -> Candidate {
        Candidate {
            password_confirmation: Some("something else".to_string()),
            ..valid_candidate()
        }
    }

    fn empty_store() -> InMemoryYetiRepository {
        InMemoryYetiRepository::new()
    }

    #[test]
    fn test_valid_candidate_passes() {
        let report = valid_candidate().validate(&empty_store()).unwrap();
        assert!(report.is_valid());
        assert!(report.failures().is_empty());
    }

    #[test]
    fn test_candidate_valid_without_confirmation() {
        let candidate = Candidate {
            password_confirmation: None,
            ..valid_candidate()
        };
        assert!(candidate.validate(&empty_store()).unwrap().is_valid());
    }

    #[test]
    fn test_candidate_invalid_without_name() {
        let report = candidate_without_name().validate(&empty_store()).unwrap();
        assert!(!report.is_valid());
        assert!(report
            .failures()
            .contains(&FieldError::new(FieldName::Name, FieldReason::Required)));
    }

    #[test]
    fn test_candidate_invalid_without_email() {
        let report = candidate_without_email().validate(&empty_store()).unwrap();
        assert!(!report.is_valid());
        assert!(report
            .failures()
            .contains(&FieldError::new(FieldName::Email, FieldReason::Required)));
    }

    #[test]
    fn test_candidate_invalid_without_password() {
        let report = candidate_without_password().validate(&empty_store()).unwrap();
        assert!(!report.is_valid());
        assert!(report
            .failures()
            .contains(&FieldError::new(FieldName::Password, FieldReason::Required)));
    }

    #[test]
    fn test_candidate_invalid_with_wrong_confirmation() {
        let report = candidate_with_wrong_confirmation()
            .validate(&empty_store())
            .unwrap();
        assert!(!report.is_valid());
        assert!(report.failures().contains(&FieldError::new(
            FieldName::PasswordConfirmation,
            FieldReason::Mismatch
        )));
    }

    #[test]
    fn test_empty_confirmation_treated_as_absent() {
        let candidate = Candidate {
            password_confirmation: Some(String::new()),
            ..valid_candidate()
        };
        assert!(candidate.validate(&empty_store()).unwrap().is_valid());
    }

    #[test]
    fn test_all_failures_reported_at_once() {
        let candidate = Candidate {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            password_confirmation: None,
        };
        let report = candidate.validate(&empty_store()).unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.failures().len(), 3);
        assert!(report
            .failures()
            .contains(&FieldError::new(FieldName::Name, FieldReason::Required)));
        assert!(report
            .failures()
            .contains(&FieldError::new(FieldName::Email, FieldReason::Required)));
        assert!(report
            .failures()
            .contains(&FieldError::new(FieldName::Password, FieldReason::Required)));
    }

    #[test]
    fn test_taken_email_reported() {
        let store = empty_store();
        crate::model::create_yeti(&valid_candidate(), &store).unwrap();

        let duplicate = Candidate {
            name: "another yeti".to_string(),
            ..valid_candidate()
        };
        let report = duplicate.validate(&store).unwrap();

        assert!(!report.is_valid());
        assert!(report
            .failures()
            .contains(&FieldError::new(FieldName::Email, FieldReason::Taken)));
    }

    #[test]
    fn test_email_uniqueness_is_case_sensitive() {
        let store = empty_store();
        crate::model::create_yeti(&valid_candidate(), &store).unwrap();

        let candidate = Candidate {
            email: "FOO@example.com".to_string(),
            ..valid_candidate()
        };
        assert!(candidate.validate(&store).unwrap().is_valid());
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new(FieldName::Email, FieldReason::Taken);
        assert_eq!(err.to_string(), "email has already been taken");
    }
}
