use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name (required, not unique)
    pub username: String,

    /// Account email (required, unique)
    pub email: String,

    /// Plaintext password, hashed before storage
    pub password: String,
}
