//! Password hashing using Argon2id
//!
//! Profiles store a PHC-format hash string; the plaintext password never
//! touches disk.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::FintrackError;

/// Hash a password into a PHC-format string with a fresh random salt
pub fn hash_password(password: &str) -> Result<String, FintrackError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| FintrackError::Config(format!("Password hashing failed: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC-format hash
///
/// A malformed stored hash verifies as false rather than erroring, so login
/// failures stay indistinguishable from a wrong password.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("s3cret").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("s3cret", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_same_password_different_hashes() {
        let hash1 = hash_password("s3cret").unwrap();
        let hash2 = hash_password("s3cret").unwrap();
        // Salts differ
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_malformed_hash_verifies_false() {
        assert!(!verify_password("s3cret", "not-a-phc-string"));
        assert!(!verify_password("s3cret", ""));
    }
}
