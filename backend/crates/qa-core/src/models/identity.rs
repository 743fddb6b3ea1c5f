//! Identity entity - one record per registered account.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored account record: the only entity the credential store holds.
///
/// Intentionally not `Serialize` - the password hash must never reach a
/// response body. Convert to [`crate::PublicUser`] before returning
/// anything to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    /// Display name. Not unique - two accounts may share a username.
    pub username: String,
    /// Lookup key. At most one identity per email value.
    pub email: String,
    /// Salted bcrypt hash of the password. Plaintext is never stored.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new identity with a fresh id and creation timestamp.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
