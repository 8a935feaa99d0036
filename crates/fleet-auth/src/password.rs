//! Password hashing and verification using Argon2.

use crate::{AuthError, Result};

use fleet_core::ErrorLocation;

use std::panic::Location;

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Hash a plaintext password into an Argon2 PHC string with a fresh salt.
#[track_caller]
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash {
            message: format!("Failed to hash password: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(password_hash.to_string())
}

/// Verify a plaintext password against a stored hash.
/// A wrong password is `Ok(false)`; a malformed stored hash is an error.
#[track_caller]
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let location = ErrorLocation::from(Location::caller());

    let parsed_hash = PasswordHash::new(hash).map_err(|e| AuthError::Hash {
        message: format!("Failed to parse password hash: {}", e),
        location,
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hash {
            message: format!("Password verification failed: {}", e),
            location,
        }),
    }
}
