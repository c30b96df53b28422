//! Product write repository.

use sqlx::PgPool;

use amrita_core::ProductId;

use super::RepositoryError;
use crate::models::{Product, ProductCreate, ProductPatch};

/// Message surfaced when a slug collides.
const SLUG_TAKEN: &str = "A product with this slug already exists";

/// Repository for supplier product management.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the full catalog, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, slug, name, description, ingredients, price, stock,
                   rating, review_count, featured, category_id, image_url,
                   created_at, updated_at
            FROM products
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        slug: &str,
        product: &ProductCreate,
    ) -> Result<Product, RepositoryError> {
        let created = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (
                slug, name, description, ingredients, price, stock,
                featured, category_id, image_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, slug, name, description, ingredients, price, stock,
                      rating, review_count, featured, category_id, image_url,
                      created_at, updated_at
            ",
        )
        .bind(slug)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.ingredients)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.featured)
        .bind(product.category_id)
        .bind(&product.image_url)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_unique_violation(e, SLUG_TAKEN))?;

        Ok(created)
    }

    /// Apply a partial update to a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, RepositoryError> {
        let updated = sqlx::query_as::<_, Product>(
            r"
            UPDATE products
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                ingredients = COALESCE($4, ingredients),
                price = COALESCE($5, price),
                stock = COALESCE($6, stock),
                featured = COALESCE($7, featured),
                category_id = COALESCE($8, category_id),
                image_url = COALESCE($9, image_url),
                updated_at = now()
            WHERE id = $1
            RETURNING id, slug, name, description, ingredients, price, stock,
                      rating, review_count, featured, category_id, image_url,
                      created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(&patch.ingredients)
        .bind(patch.price)
        .bind(patch.stock)
        .bind(patch.featured)
        .bind(patch.category_id)
        .bind(&patch.image_url)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(updated)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
