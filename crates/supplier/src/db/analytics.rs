//! Analytics aggregates.
//!
//! Placeholder numbers for the portal's analytics tab; nothing here is more
//! than a count or sum over existing tables.

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::AnalyticsSummary;

/// Repository for portal analytics.
pub struct AnalyticsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AnalyticsRepository<'a> {
    /// Create a new analytics repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the summary aggregates.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn summary(&self) -> Result<AnalyticsSummary, RepositoryError> {
        let product_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;

        let order_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(self.pool)
            .await?;

        let total_revenue: Decimal = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total_amount), 0) FROM orders WHERE status <> 'cancelled'",
        )
        .fetch_one(self.pool)
        .await?;

        let pending_reviews: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE NOT approved")
                .fetch_one(self.pool)
                .await?;

        Ok(AnalyticsSummary {
            product_count,
            order_count,
            total_revenue,
            pending_reviews,
        })
    }
}
