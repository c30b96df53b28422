//! Review route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::db::products::ProductRepository;
use crate::db::reviews::ReviewRepository;
use crate::error::{AppError, Result};
use crate::middleware::OptionalAuth;
use crate::models::{Review, review::NewReview};
use crate::state::AppState;

/// Approved reviews for a product, addressed by slug.
pub async fn for_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Review>>> {
    let product = ProductRepository::new(state.pool())
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {slug}")))?;

    let reviews = ReviewRepository::new(state.pool())
        .list_approved_for_product(&product.name)
        .await?;

    Ok(Json(reviews))
}

/// Submit a review. It lands unapproved and is invisible until moderated.
#[instrument(skip(state, user, review))]
pub async fn submit(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Json(review): Json<NewReview>,
) -> Result<(StatusCode, Json<Review>)> {
    if review.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_owned()));
    }
    if review.review_text.trim().is_empty() {
        return Err(AppError::Validation("review text is required".to_owned()));
    }
    if let Some(rating) = review.rating
        && !(1..=5).contains(&rating)
    {
        return Err(AppError::Validation(
            "rating must be between 1 and 5".to_owned(),
        ));
    }

    let created = ReviewRepository::new(state.pool())
        .submit(user.map(|u| u.id), &review)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}
