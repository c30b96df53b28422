//! Database operations for the storefront `PostgreSQL` database.
//!
//! # Tables
//!
//! - `users` / `user_passwords` - Site authentication
//! - `profiles` - Display name, avatar, role (canonical role store)
//! - `sessions` - tower-sessions storage (owned by the session store)
//! - `products` / `categories` - Catalog
//! - `cart_items` / `wishlist` - Per-user commerce state
//! - `orders` / `order_items` - Placed orders with price snapshots
//! - `addresses` - User shipping addresses
//! - `reviews` - Customer reviews (moderated via `approved`)
//! - `articles` / `doctors` - Editorial content
//! - `learn_more_content` - Marketing story sections
//! - `newsletter_subscribers` - Newsletter signups
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p amrita-cli -- migrate
//! ```
//!
//! All queries use the runtime sqlx API (`query`, `query_as`) so the crate
//! builds without a live database.

pub mod addresses;
pub mod articles;
pub mod cart;
pub mod content;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod users;
pub mod wishlist;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("{0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Remap a sqlx unique-constraint violation to a friendly `Conflict`.
    ///
    /// Any other error is wrapped as `Database`.
    pub fn from_unique_violation(err: sqlx::Error, conflict_message: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_unique_violation()
        {
            return Self::Conflict(conflict_message.to_owned());
        }
        Self::Database(err)
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Embedded migrations for the storefront schema.
///
/// Run via the CLI (`amrita-cli migrate`); never on storefront startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
