//! Wishlist route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use amrita_core::ProductId;

use crate::db::wishlist::WishlistRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::WishlistItem;
use crate::state::AppState;

/// Add to wishlist form data.
#[derive(Debug, Deserialize)]
pub struct AddToWishlistForm {
    pub product_id: ProductId,
}

/// List the wishlist.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<WishlistItem>>> {
    let items = WishlistRepository::new(state.pool()).list(user.id).await?;
    Ok(Json(items))
}

/// Add a product to the wishlist.
///
/// A second add of the same product responds 409 with "already in wishlist"
/// (the unique-violation remap), which the client shows as an informational
/// notice rather than an error.
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(form): Json<AddToWishlistForm>,
) -> Result<(StatusCode, Json<Vec<WishlistItem>>)> {
    let repo = WishlistRepository::new(state.pool());

    repo.add(user.id, form.product_id).await.map_err(|e| match e {
        crate::db::RepositoryError::NotFound => AppError::NotFound("product not found".to_owned()),
        other => AppError::Database(other),
    })?;

    let items = repo.list(user.id).await?;
    Ok((StatusCode::CREATED, Json(items)))
}

/// Remove a product from the wishlist.
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(product_id): Path<ProductId>,
) -> Result<Json<Vec<WishlistItem>>> {
    let repo = WishlistRepository::new(state.pool());

    let removed = repo.remove(user.id, product_id).await?;
    if !removed {
        return Err(AppError::NotFound("wishlist entry not found".to_owned()));
    }

    let items = repo.list(user.id).await?;
    Ok(Json(items))
}
