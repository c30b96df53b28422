//! HTTP middleware for the supplier portal.

pub mod auth;
pub mod session;

pub use auth::RequireSupplier;
pub use session::{create_session_layer, migrate_session_store};
