//! Domain models for the storefront.
//!
//! Row-shaped structs derive `sqlx::FromRow` and `serde::Serialize` so they
//! can be fetched with the runtime query API and returned as JSON directly.
//! Models whose columns need parsing (emails, roles, statuses) are built by
//! their repositories from private row types instead.

pub mod address;
pub mod article;
pub mod cart;
pub mod content;
pub mod order;
pub mod product;
pub mod review;
pub mod session;
pub mod user;

pub use address::Address;
pub use article::{Article, ArticleSummary, Doctor};
pub use cart::{CartItem, WishlistItem};
pub use content::ContentSection;
pub use order::{Order, OrderItem};
pub use product::{Category, Product};
pub use review::Review;
pub use session::{CurrentUser, session_keys};
pub use user::{Profile, User};
