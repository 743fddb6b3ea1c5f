//! Password hashing and verification.
//!
//! bcrypt with a per-hash random salt. The cost factor is supplied by
//! the caller (deployment-tunable, default 10); verification reads the
//! cost and salt back out of the stored hash.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Hash a plaintext password at the given bcrypt cost.
///
/// Every call generates a fresh salt: hashing the same plaintext twice
/// yields two different stored hashes.
pub fn hash_password(password: &str, cost: u32) -> AuthErrorResult<String> {
    bcrypt::hash(password, cost).map_err(|e| AuthError::Hash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// `Ok(false)` is a mismatch; `Err` means the stored hash itself is
/// unusable (corrupt or not a bcrypt string), which is a server fault.
pub fn verify_password(password: &str, hash: &str) -> AuthErrorResult<bool> {
    bcrypt::verify(password, hash).map_err(|e| AuthError::Hash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
