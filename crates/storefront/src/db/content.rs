//! Marketing content and newsletter repository.

use sqlx::PgPool;

use amrita_core::Email;

use super::RepositoryError;
use crate::models::ContentSection;

/// Message surfaced when an email subscribes twice.
const ALREADY_SUBSCRIBED: &str = "You are already subscribed to the newsletter";

/// Repository for marketing page content and newsletter signups.
pub struct ContentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContentRepository<'a> {
    /// Create a new content repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the story page sections in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_sections(&self) -> Result<Vec<ContentSection>, RepositoryError> {
        let sections = sqlx::query_as::<_, ContentSection>(
            r"
            SELECT slug, title, content, section_order
            FROM learn_more_content
            ORDER BY section_order
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(sections)
    }

    /// Subscribe an email to the newsletter.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already subscribed.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn subscribe_newsletter(&self, email: &Email) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO newsletter_subscribers (email)
            VALUES ($1)
            ",
        )
        .bind(email.as_str())
        .execute(self.pool)
        .await
        .map_err(|e| RepositoryError::from_unique_violation(e, ALREADY_SUBSCRIBED))?;

        Ok(())
    }
}
