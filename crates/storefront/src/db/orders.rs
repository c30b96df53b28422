//! Order repository.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use amrita_core::{OrderId, OrderStatus, ProductId, UserId};

use super::RepositoryError;
use crate::models::{Order, OrderItem};

/// Raw order row; status is parsed before it leaves the repository.
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    shipping_address: String,
    phone: String,
    notes: Option<String>,
    status: String,
    total_amount: Decimal,
    created_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Result<Order, RepositoryError> {
        let status = OrderStatus::from_str(&self.status).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid order status in database: {e}"))
        })?;
        Ok(Order {
            id: self.id,
            shipping_address: self.shipping_address,
            phone: self.phone,
            notes: self.notes,
            status,
            total_amount: self.total_amount,
            created_at: self.created_at,
        })
    }
}

/// A cart line captured at order placement.
#[derive(sqlx::FromRow)]
struct CheckoutLine {
    product_id: ProductId,
    quantity: i32,
    price: Decimal,
}

/// Repository for order operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Place an order from the user's current cart.
    ///
    /// In one transaction: reads the cart joined with current prices,
    /// creates the order, snapshots each line's price into `order_items`,
    /// and clears the cart. The snapshots are never recomputed afterwards.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the cart is empty.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn place_from_cart(
        &self,
        user_id: UserId,
        shipping_address: &str,
        phone: &str,
        notes: Option<&str>,
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let lines = sqlx::query_as::<_, CheckoutLine>(
            r"
            SELECT ci.product_id, ci.quantity, p.price
            FROM cart_items ci
            JOIN products p ON p.id = ci.product_id
            WHERE ci.user_id = $1
            ORDER BY ci.created_at
            ",
        )
        .bind(user_id)
        .fetch_all(&mut *tx)
        .await?;

        if lines.is_empty() {
            return Err(RepositoryError::Conflict("Your cart is empty".to_owned()));
        }

        let total: Decimal = lines
            .iter()
            .map(|line| line.price * Decimal::from(line.quantity))
            .sum();

        let row = sqlx::query_as::<_, OrderRow>(
            r"
            INSERT INTO orders (user_id, shipping_address, phone, notes, status, total_amount)
            VALUES ($1, $2, $3, $4, 'pending', $5)
            RETURNING id, shipping_address, phone, notes, status, total_amount, created_at
            ",
        )
        .bind(user_id)
        .bind(shipping_address)
        .bind(phone)
        .bind(notes)
        .bind(total)
        .fetch_one(&mut *tx)
        .await?;

        let order = row.into_order()?;

        for line in &lines {
            sqlx::query(
                r"
                INSERT INTO order_items (order_id, product_id, quantity, price)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(order.id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.price)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(order)
    }

    /// List the user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored status is invalid.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, shipping_address, phone, notes, status, total_amount, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }

    /// Get one of the user's orders with its line items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored status is invalid.
    pub async fn get_for_user(
        &self,
        user_id: UserId,
        order_id: OrderId,
    ) -> Result<Option<(Order, Vec<OrderItem>)>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, shipping_address, phone, notes, status, total_amount, created_at
            FROM orders
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let order = row.into_order()?;

        let items = sqlx::query_as::<_, OrderItem>(
            r"
            SELECT oi.id, oi.product_id, p.name, oi.quantity, oi.price
            FROM order_items oi
            JOIN products p ON p.id = oi.product_id
            WHERE oi.order_id = $1
            ORDER BY oi.created_at
            ",
        )
        .bind(order.id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some((order, items)))
    }
}
