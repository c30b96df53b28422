//! Domain models for the supplier portal.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use amrita_core::{CategoryId, ProductId, ReviewId, Role, UserId};

/// Session-stored portal identity.
///
/// Only users whose profile role passes `Role::can_manage_catalog` ever get
/// one of these written to a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalUser {
    pub id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
}

/// Session keys for portal authentication data.
pub mod session_keys {
    /// Key for storing the logged-in portal user.
    pub const PORTAL_USER: &str = "portal_user";
}

/// A product as managed in the portal (full detail, no public filtering).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub rating: Option<Decimal>,
    pub review_count: i32,
    pub featured: bool,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a product.
///
/// `slug` is optional; when omitted it is derived from the name.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    pub slug: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub featured: bool,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<String>,
}

/// Partial product update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub featured: Option<bool>,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<String>,
}

/// A review in the moderation queue.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Review {
    pub id: ReviewId,
    pub name: String,
    pub location: String,
    pub product: String,
    pub rating: Option<i32>,
    pub review_text: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Aggregate numbers for the analytics placeholder tab.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    pub product_count: i64,
    pub order_count: i64,
    pub total_revenue: Decimal,
    pub pending_reviews: i64,
}
