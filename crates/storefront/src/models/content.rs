//! Marketing content models.

use serde::Serialize;

/// An ordered section of a marketing content page (e.g., "Our Story").
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContentSection {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub section_order: i32,
}
