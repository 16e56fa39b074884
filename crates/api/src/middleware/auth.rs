//! # Authentication Module
//!
//! Password hashing and verification for portal accounts.
//!
//! The implementation uses Argon2, a secure password hashing algorithm,
//! to protect user passwords from common attacks like rainbow tables
//! and brute force attempts. Plaintext passwords are never stored or logged.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use eyre::Result;
use tracing::warn;

/// Hashes a password using the Argon2 algorithm
///
/// A fresh random salt is generated for every call, so hashing the same
/// password twice yields different strings.
///
/// # Returns
///
/// * `Result<String>` - The password in PHC string format (algorithm, version,
///   parameters, salt and hash)
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a password against a stored PHC hash
///
/// A stored value that is not a valid PHC string (for instance a legacy
/// plaintext password) never verifies.
pub fn verify_password(stored_hash: &str, password: &str) -> bool {
    let parsed_hash = match PasswordHash::new(stored_hash) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Stored password is not a valid hash: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// [`hash_password`] on tokio's blocking pool, keeping Argon2 off the
/// request workers.
pub async fn hash_password_blocking(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

/// [`verify_password`] on tokio's blocking pool.
pub async fn verify_password_blocking(stored_hash: String, password: String) -> Result<bool> {
    let verified =
        tokio::task::spawn_blocking(move || verify_password(&stored_hash, &password)).await?;
    Ok(verified)
}
