//! Article and doctor repository.

use sqlx::PgPool;

use amrita_core::DoctorId;

use super::RepositoryError;
use crate::models::{Article, ArticleSummary, Doctor};

/// Repository for editorial content.
pub struct ArticleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ArticleRepository<'a> {
    /// Create a new article repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List published articles with their doctor byline, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_published(&self) -> Result<Vec<ArticleSummary>, RepositoryError> {
        let articles = sqlx::query_as::<_, ArticleSummary>(
            r"
            SELECT a.id, a.slug, a.title, a.excerpt, a.category, a.tags,
                   a.read_time, a.image_url, a.published_at,
                   a.doctor_id, d.name AS doctor_name
            FROM articles a
            LEFT JOIN doctors d ON d.id = a.doctor_id
            WHERE a.published_at IS NOT NULL AND a.published_at <= now()
            ORDER BY a.published_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(articles)
    }

    /// Get a published article by slug, including its markdown body.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_published_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Article>, RepositoryError> {
        let article = sqlx::query_as::<_, Article>(
            r"
            SELECT id, slug, title, content, excerpt, category, tags,
                   read_time, image_url, published_at, doctor_id
            FROM articles
            WHERE slug = $1 AND published_at IS NOT NULL AND published_at <= now()
            ",
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        Ok(article)
    }

    /// Get a doctor profile by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_doctor(&self, id: DoctorId) -> Result<Option<Doctor>, RepositoryError> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r"
            SELECT id, name, title, specialization, bio, certifications,
                   experience_years, image_url
            FROM doctors
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(doctor)
    }

    /// List a doctor's published articles, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_published_by_doctor(
        &self,
        doctor_id: DoctorId,
    ) -> Result<Vec<ArticleSummary>, RepositoryError> {
        let articles = sqlx::query_as::<_, ArticleSummary>(
            r"
            SELECT a.id, a.slug, a.title, a.excerpt, a.category, a.tags,
                   a.read_time, a.image_url, a.published_at,
                   a.doctor_id, d.name AS doctor_name
            FROM articles a
            LEFT JOIN doctors d ON d.id = a.doctor_id
            WHERE a.doctor_id = $1
              AND a.published_at IS NOT NULL AND a.published_at <= now()
            ORDER BY a.published_at DESC
            ",
        )
        .bind(doctor_id)
        .fetch_all(self.pool)
        .await?;

        Ok(articles)
    }
}
