use qa_core::PublicUser;

use serde::Serialize;

/// Sanitized user DTO for JSON serialization. The password hash never
/// appears here - the source type does not carry it.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<PublicUser> for UserDto {
    fn from(u: PublicUser) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
            email: u.email,
        }
    }
}
