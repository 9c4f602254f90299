//! # Password Hashing
//!
//! Passwords are only ever stored as Argon2id digests; the plaintext is
//! dropped as soon as the digest is derived.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::errors::{YetiError, YetiResult};

/// Hash a password using Argon2id
pub fn hash_password(password: &str) -> YetiResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| YetiError::HashingFailed)
}

/// Verify a password against its stored digest
///
/// Uses constant-time comparison internally (via argon2 crate).
pub fn verify_password(password: &str, digest: &str) -> YetiResult<bool> {
    let parsed = PasswordHash::new(digest).map_err(|_| YetiError::HashingFailed)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let password = "P@ssword1!";
        let digest = hash_password(password).unwrap();

        // Digest should be different from password
        assert_ne!(digest, password);

        // Verification should succeed
        assert!(verify_password(password, &digest).unwrap());

        // Wrong password should fail
        assert!(!verify_password("wrong_password", &digest).unwrap());
    }

    #[test]
    fn test_password_hash_produces_unique_digests() {
        let password = "same_password";
        let digest1 = hash_password(password).unwrap();
        let digest2 = hash_password(password).unwrap();

        // Same password should produce different digests (due to salt)
        assert_ne!(digest1, digest2);

        // But both should verify
        assert!(verify_password(password, &digest1).unwrap());
        assert!(verify_password(password, &digest2).unwrap());
    }

    #[test]
    fn test_malformed_digest_rejected() {
        let result = verify_password("anything", "not-a-phc-string");
        assert!(matches!(result, Err(YetiError::HashingFailed)));
    }
}
