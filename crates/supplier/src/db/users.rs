//! Portal user lookup.

use core::str::FromStr;

use sqlx::PgPool;

use amrita_core::{Role, UserId};

use super::RepositoryError;

/// Credentials row for a portal login attempt.
#[derive(sqlx::FromRow)]
pub struct CredentialsRow {
    pub user_id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub password_hash: String,
    role: String,
}

impl CredentialsRow {
    /// Parse the stored role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the stored role is invalid.
    pub fn role(&self) -> Result<Role, RepositoryError> {
        Role::from_str(&self.role).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid role in database: {e}"))
        })
    }
}

/// Repository for portal user lookups.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch credentials and profile for an email, if the account has a
    /// password set.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_credentials(
        &self,
        email: &str,
    ) -> Result<Option<CredentialsRow>, RepositoryError> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            r"
            SELECT u.id AS user_id, u.email, pr.full_name, p.password_hash, pr.role
            FROM users u
            JOIN user_passwords p ON p.user_id = u.id
            JOIN profiles pr ON pr.user_id = u.id
            WHERE u.email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }
}
