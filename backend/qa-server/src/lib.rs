pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::{login, register},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        register_request::RegisterRequest,
        user_dto::UserDto,
    },
    error::ApiError,
    error::Result as ApiResult,
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
