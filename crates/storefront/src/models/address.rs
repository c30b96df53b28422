//! Address model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use amrita_core::{AddressId, UserId};

/// A user-owned shipping address.
///
/// At most one address per user carries `is_default`; the repository clears
/// the previous default in the same transaction that sets a new one.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Address {
    pub id: AddressId,
    #[serde(skip)]
    pub user_id: UserId,
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an address.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAddress {
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Partial update for an address; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressPatch {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub is_default: Option<bool>,
}
