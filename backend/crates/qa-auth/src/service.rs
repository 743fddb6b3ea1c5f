//! The auth service: stateless register/login orchestration over the
//! credential store.
//!
//! The store handle is injected at construction time and the service
//! holds no other state, so a single instance is built at process start
//! and cloned into each request handler.

use crate::{AuthError, Result as AuthErrorResult, password, validation};

use qa_core::{Identity, PublicUser};
use qa_db::{DbError, IdentityRepository};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info};

#[derive(Clone)]
pub struct AuthService {
    repo: IdentityRepository,
    hash_cost: u32,
}

impl AuthService {
    pub fn new(repo: IdentityRepository, hash_cost: u32) -> Self {
        Self { repo, hash_cost }
    }

    /// Register a new account.
    ///
    /// The existence check gives the common duplicate case a fast
    /// answer; the unique index on email is what actually guarantees at
    /// most one identity per email when two registrations race.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<PublicUser> {
        validation::validate_registration(username, email, password)?;

        if self.repo.find_by_email(email).await?.is_some() {
            debug!("registration rejected: email already on file");
            return Err(AuthError::DuplicateAccount {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let hash = password::hash_password(password, self.hash_cost)?;
        let identity = Identity::new(username.to_string(), email.to_string(), hash);

        match self.repo.create(&identity).await {
            Ok(()) => {}
            // Lost the race against a concurrent registration: the
            // store's unique index is the authoritative signal.
            Err(DbError::UniqueViolation { .. }) => {
                debug!("registration lost insert race: email already on file");
                return Err(AuthError::DuplicateAccount {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(e.into()),
        }

        info!("registered identity {}", identity.id);
        Ok(identity.into())
    }

    /// Authenticate an existing account.
    ///
    /// A lookup miss and a password mismatch return the same error kind
    /// so callers cannot probe which emails are registered.
    pub async fn login(&self, email: &str, password: &str) -> AuthErrorResult<PublicUser> {
        let Some(identity) = self.repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !password::verify_password(password, &identity.password_hash)? {
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!("login succeeded for identity {}", identity.id);
        Ok(identity.into())
    }
}
