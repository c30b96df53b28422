//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use amrita_core::OrderId;

use crate::db::orders::OrderRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Order, OrderItem};
use crate::state::AppState;

/// Place order form data.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderForm {
    pub shipping_address: String,
    pub phone: String,
    pub notes: Option<String>,
}

/// Order detail payload.
#[derive(Serialize)]
pub struct OrderDetailPayload {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Place an order from the current cart.
///
/// Line prices are snapshotted inside the placement transaction; the cart is
/// cleared in the same transaction.
#[instrument(skip(state, user, form), fields(user_id = %user.id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(form): Json<PlaceOrderForm>,
) -> Result<(StatusCode, Json<Order>)> {
    if form.shipping_address.trim().is_empty() {
        return Err(AppError::Validation(
            "shipping address is required".to_owned(),
        ));
    }
    if form.phone.trim().is_empty() {
        return Err(AppError::Validation("phone number is required".to_owned()));
    }

    let order = OrderRepository::new(state.pool())
        .place_from_cart(
            user.id,
            form.shipping_address.trim(),
            form.phone.trim(),
            form.notes.as_deref(),
        )
        .await?;

    tracing::info!(order_id = %order.id, total = %order.total_amount, "order placed");

    Ok((StatusCode::CREATED, Json(order)))
}

/// Order history, newest first.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;
    Ok(Json(orders))
}

/// Order detail with line items.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(order_id): Path<OrderId>,
) -> Result<Json<OrderDetailPayload>> {
    let (order, items) = OrderRepository::new(state.pool())
        .get_for_user(user.id, order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))?;

    Ok(Json(OrderDetailPayload { order, items }))
}
