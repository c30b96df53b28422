//! Order models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use amrita_core::{OrderId, OrderItemId, OrderStatus, ProductId};

/// A placed order.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub shipping_address: String,
    pub phone: String,
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// A line item within an order.
///
/// `price` is the per-unit amount snapshotted when the order was placed;
/// later catalog price changes never touch it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub product_id: ProductId,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
}
