//! User and profile models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use amrita_core::{Email, Role, UserId};

/// An authenticated user identity.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user profile: display data plus the canonical role.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub user_id: UserId,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Role,
}
