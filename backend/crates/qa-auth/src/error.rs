use qa_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Registration with an email already on file. User-correctable.
    #[error("Account already exists for this email {location}")]
    DuplicateAccount { location: ErrorLocation },

    /// Login lookup miss or password mismatch. The two cases are
    /// deliberately indistinguishable to the caller.
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Registration input rejected before touching the store.
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<&'static str>,
        location: ErrorLocation,
    },

    /// Password hashing or verification machinery failed. A server
    /// fault, never a credential error.
    #[error("Password hashing failed: {message} {location}")]
    Hash {
        message: String,
        location: ErrorLocation,
    },

    /// Credential store unreachable or misbehaving.
    #[error("Credential store error: {source} {location}")]
    Db {
        source: DbError,
        location: ErrorLocation,
    },
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
