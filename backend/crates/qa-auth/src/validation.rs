//! Registration input validation.
//!
//! Login inputs are not validated here - an implausible email is simply
//! never found and collapses into the same invalid-credentials error as
//! a wrong password.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_USERNAME_LENGTH: usize = 64;
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Validate the three registration inputs.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> AuthErrorResult<()> {
    validate_username(username)?;
    validate_email(email)?;
    validate_password(password)?;
    Ok(())
}

fn validate_username(username: &str) -> AuthErrorResult<()> {
    if username.trim().is_empty() {
        return Err(validation_error("username is required", "username"));
    }
    if username.len() > MAX_USERNAME_LENGTH {
        return Err(validation_error(
            &format!("username must be at most {} characters", MAX_USERNAME_LENGTH),
            "username",
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> AuthErrorResult<()> {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(validation_error(
            &format!("email must be at most {} characters", MAX_EMAIL_LENGTH),
            "email",
        ));
    }

    // Exactly one '@' with non-empty local and domain parts
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
        _ => return Err(validation_error("email is not a valid address", "email")),
    }

    Ok(())
}

fn validate_password(password: &str) -> AuthErrorResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(validation_error(
            &format!("password must be at least {} characters", MIN_PASSWORD_LENGTH),
            "password",
        ));
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(validation_error(
            &format!("password must be at most {} characters", MAX_PASSWORD_LENGTH),
            "password",
        ));
    }
    Ok(())
}

#[track_caller]
fn validation_error(message: &str, field: &'static str) -> AuthError {
    AuthError::Validation {
        message: message.to_string(),
        field: Some(field),
        location: ErrorLocation::from(Location::caller()),
    }
}
