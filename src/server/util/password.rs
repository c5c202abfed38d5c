//! Argon2id password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::server::error::internal::InternalError;

/// Hashes a plaintext password into a PHC string (`$argon2id$v=19$...`).
///
/// A fresh random salt is generated for every call, so hashing the same password
/// twice produces different strings.
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use argon2::{password_hash::PasswordHash, PasswordVerifier};

    use super::*;

    #[test]
    fn hash_verifies_against_the_original_password() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2id$"));

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"correct horse", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"battery staple", &parsed)
            .is_err());
    }

    #[test]
    fn salts_differ_between_calls() {
        assert_ne!(hash_password("same").unwrap(), hash_password("same").unwrap());
    }
}
