//! Review repository.

use sqlx::PgPool;

use amrita_core::UserId;

use super::RepositoryError;
use crate::models::{Review, review::NewReview};

/// Repository for customer reviews.
///
/// Public reads only ever see approved reviews; moderation happens in the
/// supplier portal.
pub struct ReviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List recent approved reviews (home page carousel).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_approved(&self, limit: i64) -> Result<Vec<Review>, RepositoryError> {
        let reviews = sqlx::query_as::<_, Review>(
            r"
            SELECT id, name, location, product, rating, review_text, image_url,
                   approved, created_at
            FROM reviews
            WHERE approved
            ORDER BY created_at DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }

    /// List approved reviews for one product, by display name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_approved_for_product(
        &self,
        product_name: &str,
    ) -> Result<Vec<Review>, RepositoryError> {
        let reviews = sqlx::query_as::<_, Review>(
            r"
            SELECT id, name, location, product, rating, review_text, image_url,
                   approved, created_at
            FROM reviews
            WHERE approved AND product = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(product_name)
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }

    /// Submit a review; it lands unapproved and waits for moderation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn submit(
        &self,
        user_id: Option<UserId>,
        review: &NewReview,
    ) -> Result<Review, RepositoryError> {
        let created = sqlx::query_as::<_, Review>(
            r"
            INSERT INTO reviews (user_id, name, location, product, rating, review_text, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, location, product, rating, review_text, image_url,
                      approved, created_at
            ",
        )
        .bind(user_id)
        .bind(&review.name)
        .bind(&review.location)
        .bind(&review.product)
        .bind(review.rating)
        .bind(&review.review_text)
        .bind(&review.image_url)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }
}
