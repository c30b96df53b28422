//! Review moderation route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use amrita_core::ReviewId;

use crate::db::reviews::ReviewRepository;
use crate::error::Result;
use crate::middleware::RequireSupplier;
use crate::models::Review;
use crate::state::AppState;

/// Moderation queue filter.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewFilter {
    /// `true` for published, `false` for the pending queue; unset for all.
    pub approved: Option<bool>,
}

/// List reviews for moderation.
pub async fn index(
    State(state): State<AppState>,
    RequireSupplier(_user): RequireSupplier,
    Query(filter): Query<ReviewFilter>,
) -> Result<Json<Vec<Review>>> {
    let reviews = ReviewRepository::new(state.pool())
        .list(filter.approved)
        .await?;
    Ok(Json(reviews))
}

/// Approve a review, making it publicly visible.
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn approve(
    State(state): State<AppState>,
    RequireSupplier(user): RequireSupplier,
    Path(id): Path<ReviewId>,
) -> Result<Json<Review>> {
    let review = ReviewRepository::new(state.pool()).approve(id).await?;

    tracing::info!(review_id = %id, "review approved");

    Ok(Json(review))
}
