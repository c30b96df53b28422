//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use amrita_core::{Email, Role, UserId};

/// Session-stored user identity.
///
/// The single context object for the logged-in user: written once at login
/// by the auth routes, read everywhere else via the auth extractors. No
/// handler re-derives identity or role on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name from the profile, if set.
    pub full_name: Option<String>,
    /// Role from the profile, resolved at login.
    pub role: Role,
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
