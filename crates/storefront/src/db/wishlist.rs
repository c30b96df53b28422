//! Wishlist repository.

use sqlx::PgPool;

use amrita_core::{ProductId, UserId};

use super::RepositoryError;
use crate::models::WishlistItem;

/// Message surfaced when a product is wishlisted twice.
const ALREADY_IN_WISHLIST: &str = "This product is already in your wishlist";

/// Repository for wishlist operations.
pub struct WishlistRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WishlistRepository<'a> {
    /// Create a new wishlist repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the user's wishlist, newest first, joined with product data.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<WishlistItem>, RepositoryError> {
        let items = sqlx::query_as::<_, WishlistItem>(
            r"
            SELECT w.id, w.product_id, p.slug, p.name, p.price, p.image_url,
                   w.created_at
            FROM wishlist w
            JOIN products p ON p.id = w.product_id
            WHERE w.user_id = $1
            ORDER BY w.created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Add a product to the user's wishlist.
    ///
    /// A duplicate add hits the unique (`user_id`, `product_id`) constraint;
    /// that violation is the observable "already in wishlist" signal and is
    /// remapped to `Conflict` with a friendly message.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the product is already wishlisted.
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn add(&self, user_id: UserId, product_id: ProductId) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO wishlist (user_id, product_id)
            VALUES ($1, $2)
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return RepositoryError::Conflict(ALREADY_IN_WISHLIST.to_owned());
                }
                if db_err.is_foreign_key_violation() {
                    return RepositoryError::NotFound;
                }
            }
            RepositoryError::Database(e)
        })?;

        Ok(())
    }

    /// Remove a product from the user's wishlist.
    ///
    /// # Returns
    ///
    /// Returns `true` if an entry was removed, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn remove(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM wishlist
            WHERE user_id = $1 AND product_id = $2
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
