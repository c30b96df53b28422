//! HTTP route handlers for the supplier portal.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health               - Health check
//!
//! # Auth
//! POST /auth/login           - Login (storefront credentials, portal role required)
//! POST /auth/logout          - Logout
//!
//! # Products (requires supplier/admin role)
//! GET    /products           - Full catalog, management view
//! POST   /products           - Create product
//! PATCH  /products/{id}      - Update product
//! DELETE /products/{id}      - Delete product
//!
//! # Reviews (requires supplier/admin role)
//! GET  /reviews              - Moderation queue (?approved=true|false)
//! POST /reviews/{id}/approve - Approve a review
//!
//! # Analytics (requires supplier/admin role)
//! GET  /analytics/summary    - Aggregate counts and revenue
//! ```

pub mod analytics;
pub mod auth;
pub mod products;
pub mod reviews;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the supplier portal.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/products", get(products::index).post(products::create))
        .route(
            "/products/{id}",
            axum::routing::patch(products::update).delete(products::delete),
        )
        .route("/reviews", get(reviews::index))
        .route("/reviews/{id}/approve", post(reviews::approve))
        .route("/analytics/summary", get(analytics::summary))
}
