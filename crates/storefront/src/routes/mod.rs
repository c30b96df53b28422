//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Home payload (featured, reviews, articles)
//! GET  /health                   - Health check
//!
//! # Catalog
//! GET  /products                 - Product listing (filter/sort pipeline)
//! GET  /products/{slug}          - Product detail with approved reviews
//! GET  /products/{slug}/reviews  - Approved reviews for a product
//! GET  /categories               - Category list
//!
//! # Auth
//! POST /auth/register            - Register (role: user | supplier)
//! POST /auth/login               - Login, writes CurrentUser to the session
//! POST /auth/logout              - Logout, destroys the session
//! GET  /auth/me                  - Session-attached identity
//!
//! # Cart (requires auth)
//! GET    /cart                   - Cart with line totals and subtotal
//! POST   /cart/items             - Add item (upsert on (user, product))
//! PATCH  /cart/items/{product_id} - Set quantity
//! DELETE /cart/items/{product_id} - Remove line
//! GET    /cart/count             - Cart count badge
//!
//! # Wishlist (requires auth)
//! GET    /wishlist               - Wishlist entries
//! POST   /wishlist               - Add (duplicate -> 409 "already in wishlist")
//! DELETE /wishlist/{product_id}  - Remove entry
//!
//! # Orders (requires auth)
//! POST /orders                   - Place order from cart (price snapshots)
//! GET  /orders                   - Order history
//! GET  /orders/{id}              - Order detail with line items
//!
//! # Account (requires auth)
//! GET   /account/profile         - Profile
//! PATCH /account/profile         - Update display fields
//! GET   /account/addresses       - Address list
//! POST  /account/addresses       - Create address
//! PATCH  /account/addresses/{id} - Update address
//! DELETE /account/addresses/{id} - Delete address
//!
//! # Content
//! GET  /articles                 - Published articles with doctor bylines
//! GET  /articles/{slug}          - Article detail (markdown rendered)
//! GET  /doctors/{id}             - Doctor profile with their articles
//! GET  /pages/our-story          - Story page sections
//! POST /reviews                  - Submit a review (lands unapproved)
//! POST /newsletter               - Newsletter signup
//! ```

pub mod account;
pub mod articles;
pub mod auth;
pub mod cart;
pub mod home;
pub mod newsletter;
pub mod orders;
pub mod pages;
pub mod products;
pub mod reviews;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::auth_rate_limiter;
use crate::state::AppState;

/// Create the auth routes router (rate limited).
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .layer(auth_rate_limiter())
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{slug}", get(products::show))
        .route("/{slug}/reviews", get(reviews::for_product))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", post(cart::add))
        .route(
            "/items/{product_id}",
            axum::routing::patch(cart::update).delete(cart::remove),
        )
        .route("/count", get(cart::count))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::index).post(wishlist::add))
        .route("/{product_id}", axum::routing::delete(wishlist::remove))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index).post(orders::create))
        .route("/{id}", get(orders::show))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(account::profile).patch(account::update_profile),
        )
        .route(
            "/addresses",
            get(account::addresses).post(account::create_address),
        )
        .route(
            "/addresses/{id}",
            axum::routing::patch(account::update_address).delete(account::delete_address),
        )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home payload
        .route("/", get(home::home))
        // Catalog
        .nest("/products", product_routes())
        .route("/categories", get(products::categories))
        // Cart
        .nest("/cart", cart_routes())
        // Wishlist
        .nest("/wishlist", wishlist_routes())
        // Orders
        .nest("/orders", order_routes())
        // Account
        .nest("/account", account_routes())
        // Auth
        .nest("/auth", auth_routes())
        // Editorial content
        .route("/articles", get(articles::index))
        .route("/articles/{slug}", get(articles::show))
        .route("/doctors/{id}", get(articles::doctor))
        .route("/pages/our-story", get(pages::our_story))
        .route("/reviews", post(reviews::submit))
        .route("/newsletter", post(newsletter::subscribe))
}
