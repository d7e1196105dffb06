//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=19456,t=2,p=1$...`).
//! Hashing is memory-hard and slow on purpose, so both operations run on
//! tokio's blocking pool instead of a request worker.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use error_location::ErrorLocation;

/// Hash `password` with a fresh random salt
pub async fn hash_password(password: &str) -> AuthErrorResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(|e| AuthError::Hash {
            message: format!("Hashing task failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?
}

/// Check `password` against a stored PHC string.
/// A mismatch is `Ok(false)`; a malformed hash is an error.
pub async fn verify_password(password: &str, hash: &str) -> AuthErrorResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || verify_blocking(&password, &hash))
        .await
        .map_err(|e| AuthError::Hash {
            message: format!("Verification task failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?
}

#[track_caller]
fn hash_blocking(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash {
            message: format!("Failed to hash password: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
fn verify_blocking(password: &str, hash: &str) -> AuthErrorResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::Hash {
        message: format!("Invalid password hash: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
