//! Cart route handlers.
//!
//! Mutations respond with the refreshed cart so the client can replace its
//! local copy wholesale (re-fetch after mutation, never patched in place).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use amrita_core::ProductId;

use crate::db::cart::CartRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::CartItem;
use crate::state::AppState;

/// A cart line with its computed total.
#[derive(Serialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CartItem,
    pub line_total: Decimal,
}

/// Cart payload with subtotal and badge count.
#[derive(Serialize)]
pub struct CartPayload {
    pub items: Vec<CartLine>,
    pub subtotal: Decimal,
    pub item_count: i64,
}

/// Cart count badge payload.
#[derive(Serialize)]
pub struct CartCountPayload {
    pub count: i64,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    pub quantity: Option<i32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub quantity: i32,
}

/// Build the cart payload for a user.
async fn cart_payload(state: &AppState, user_id: amrita_core::UserId) -> Result<CartPayload> {
    let items = CartRepository::new(state.pool()).list(user_id).await?;

    let mut subtotal = Decimal::ZERO;
    let mut item_count = 0_i64;
    let items = items
        .into_iter()
        .map(|item| {
            let line_total = item.line_total();
            subtotal += line_total;
            item_count += i64::from(item.quantity);
            CartLine { item, line_total }
        })
        .collect();

    Ok(CartPayload {
        items,
        subtotal,
        item_count,
    })
}

/// Validate a requested quantity.
fn validate_quantity(quantity: i32) -> Result<i32> {
    if quantity < 1 {
        return Err(AppError::Validation(
            "quantity must be a positive integer".to_owned(),
        ));
    }
    Ok(quantity)
}

/// Display the cart.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<CartPayload>> {
    Ok(Json(cart_payload(&state, user.id).await?))
}

/// Add an item to the cart (upsert on (user, product)).
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(form): Json<AddToCartForm>,
) -> Result<(StatusCode, Json<CartPayload>)> {
    let quantity = validate_quantity(form.quantity.unwrap_or(1))?;

    CartRepository::new(state.pool())
        .upsert_item(user.id, form.product_id, quantity)
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                AppError::NotFound("product not found".to_owned())
            }
            other => AppError::Database(other),
        })?;

    Ok((StatusCode::CREATED, Json(cart_payload(&state, user.id).await?)))
}

/// Set the quantity of a cart line.
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(product_id): Path<ProductId>,
    Json(form): Json<UpdateCartForm>,
) -> Result<Json<CartPayload>> {
    let quantity = validate_quantity(form.quantity)?;

    CartRepository::new(state.pool())
        .set_quantity(user.id, product_id, quantity)
        .await?;

    Ok(Json(cart_payload(&state, user.id).await?))
}

/// Remove a cart line.
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(product_id): Path<ProductId>,
) -> Result<Json<CartPayload>> {
    let removed = CartRepository::new(state.pool())
        .remove(user.id, product_id)
        .await?;

    if !removed {
        return Err(AppError::NotFound("cart item not found".to_owned()));
    }

    Ok(Json(cart_payload(&state, user.id).await?))
}

/// Cart count badge.
pub async fn count(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<CartCountPayload>> {
    let count = CartRepository::new(state.pool()).count(user.id).await?;
    Ok(Json(CartCountPayload { count }))
}
