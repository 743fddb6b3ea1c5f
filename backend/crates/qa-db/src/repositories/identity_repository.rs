//! Identity repository - keyed storage of account records.
//!
//! The store exposes exactly two operations: lookup by email and insert.
//! Records are never updated or deleted. Email uniqueness is enforced by
//! a unique index on `identities.email`; a lost race between two
//! concurrent inserts surfaces as [`DbError::UniqueViolation`] rather
//! than a second row.

use crate::{DbError, Result as DbErrorResult};

use qa_core::Identity;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new identity record.
    ///
    /// Returns [`DbError::UniqueViolation`] when a record with the same
    /// email already exists.
    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        let id = identity.id.to_string();
        let created_at = identity.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO identities (id, username, email, password_hash, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&identity.username)
        .bind(&identity.email)
        .bind(&identity.password_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                DbError::UniqueViolation {
                    column: "email",
                    location: ErrorLocation::from(Location::caller()),
                }
            } else {
                DbError::from(e)
            }
        })?;

        Ok(())
    }

    /// Look up an identity by email. Exact match, no side effects.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
                SELECT id, username, email, password_hash, created_at
                FROM identities
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<Identity> {
            let id: String = r.try_get("id")?;
            let created_at: i64 = r.try_get("created_at")?;

            Ok(Identity {
                id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
                    message: format!("Invalid UUID in identity.id: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?,
                username: r.try_get("username")?,
                email: r.try_get("email")?,
                password_hash: r.try_get("password_hash")?,
                created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
                    DbError::Initialization {
                        message: "Invalid timestamp in identity.created_at".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?,
            })
        })
        .transpose()
    }
}
