use qa_auth::AuthService;
use qa_db::IdentityRepository;

use std::time::Duration;

use sqlx::SqlitePool;

/// Shared application state for API handlers.
///
/// The auth service is constructed once here, with the credential store
/// handle injected, and cloned into each handler invocation.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: AuthService,
    pub handler_timeout: Duration,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &qa_config::Config) -> Self {
        let auth = AuthService::new(IdentityRepository::new(pool.clone()), config.auth.hash_cost);

        Self {
            pool,
            auth,
            handler_timeout: Duration::from_secs(config.handler.timeout_secs),
        }
    }
}
