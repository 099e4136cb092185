//! Argon2 password hashing.
//!
//! Argon2 is CPU-bound, so both operations run on the blocking thread pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a plaintext password into a PHC string with a random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted Argon2 hash
/// - `Err(AppError::InternalErr(PasswordHash))` - Hashing failed
/// - `Err(AppError::InternalErr(BlockingTask))` - Hashing task panicked or was cancelled
pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| InternalError::PasswordHash(e.to_string()))
    })
    .await
    .map_err(InternalError::BlockingTask)?
    .map_err(AppError::from)
}

/// Checks a plaintext password against a stored PHC hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalErr(PasswordHash))` - Stored hash is unparsable
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    tokio::task::spawn_blocking(move || -> Result<bool, InternalError> {
        let parsed =
            PasswordHash::new(&hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    })
    .await
    .map_err(InternalError::BlockingTask)?
    .map_err(AppError::from)
}
