use crate::UserDto;
use serde::Serialize;

/// Successful register/login response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserDto,
}
