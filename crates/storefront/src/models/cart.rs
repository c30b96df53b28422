//! Cart and wishlist models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use amrita_core::{CartItemId, ProductId, WishlistItemId};

/// A cart line, joined with the product it references.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub slug: String,
    pub name: String,
    /// Current catalog price; orders snapshot this at placement.
    pub price: Decimal,
    pub image_url: Option<String>,
    pub quantity: i32,
}

impl CartItem {
    /// Price x quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A wishlist entry, joined with the product it references.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WishlistItem {
    pub id: WishlistItemId,
    pub product_id: ProductId,
    pub slug: String,
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = CartItem {
            id: CartItemId::generate(),
            product_id: ProductId::generate(),
            slug: "ashwagandha-capsules".to_string(),
            name: "Ashwagandha Capsules".to_string(),
            price: Decimal::new(59900, 2),
            image_url: None,
            quantity: 3,
        };
        assert_eq!(item.line_total(), Decimal::new(179700, 2));
    }
}
