//! Review moderation repository.

use sqlx::PgPool;

use amrita_core::ReviewId;

use super::RepositoryError;
use crate::models::Review;

/// Repository for review moderation.
pub struct ReviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List reviews, optionally filtered by approval state, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, approved: Option<bool>) -> Result<Vec<Review>, RepositoryError> {
        let reviews = sqlx::query_as::<_, Review>(
            r"
            SELECT id, name, location, product, rating, review_text, approved, created_at
            FROM reviews
            WHERE approved = COALESCE($1, approved)
            ORDER BY created_at DESC
            ",
        )
        .bind(approved)
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }

    /// Approve a review, making it publicly visible.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the review doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn approve(&self, id: ReviewId) -> Result<Review, RepositoryError> {
        let review = sqlx::query_as::<_, Review>(
            r"
            UPDATE reviews
            SET approved = TRUE
            WHERE id = $1
            RETURNING id, name, location, product, rating, review_text, approved, created_at
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(review)
    }
}
