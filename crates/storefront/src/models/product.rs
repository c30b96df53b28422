//! Product and category models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use amrita_core::{CategoryId, ProductId};

/// A catalog product.
///
/// This is the record the catalog pipeline filters and sorts; it is fetched
/// wholesale (the full catalog) and served from the in-memory cache.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    /// Average rating 0-5; `None` until the first review lands.
    pub rating: Option<Decimal>,
    pub review_count: i32,
    pub featured: bool,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product category.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
