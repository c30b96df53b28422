//! Review model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use amrita_core::ReviewId;

/// A customer review.
///
/// Reviews reference products by display name (matching the legacy data) and
/// are only served publicly once `approved` is set by a moderator.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Review {
    pub id: ReviewId,
    pub name: String,
    pub location: String,
    pub product: String,
    pub rating: Option<i32>,
    pub review_text: String,
    pub image_url: Option<String>,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting a review. New reviews land unapproved.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub name: String,
    pub location: String,
    pub product: String,
    pub rating: Option<i32>,
    pub review_text: String,
    pub image_url: Option<String>,
}
