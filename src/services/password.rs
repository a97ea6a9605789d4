//! Password hashing utilities.

use actix_web::error::BlockingError;
use actix_web::web;
use bcrypt::hash;
use thiserror::Error;

use crate::constants::PASSWORD_HASH_COST;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("blocking pool error: {0}")]
    Blocking(#[from] BlockingError),
}

/// Hash a password with bcrypt (cost 12) on the blocking thread pool.
///
/// bcrypt generates a fresh random salt for every call.
pub async fn hash_password(password: String) -> Result<String, PasswordError> {
    let hashed = web::block(move || hash(password, PASSWORD_HASH_COST)).await??;
    Ok(hashed)
}

/// Verify a password against a bcrypt hash.
#[cfg(test)]
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    Ok(bcrypt::verify(password, hash)?)
}
