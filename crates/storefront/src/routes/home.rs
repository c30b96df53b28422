//! Home route handler.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::articles::ArticleRepository;
use crate::db::products::ProductRepository;
use crate::db::reviews::ReviewRepository;
use crate::error::Result;
use crate::models::{ArticleSummary, Product, Review};
use crate::state::AppState;

/// How many featured products the hero section shows.
const FEATURED_LIMIT: i64 = 8;

/// How many approved reviews the carousel shows.
const REVIEWS_LIMIT: i64 = 6;

/// Everything the landing page needs in one payload.
#[derive(Serialize)]
pub struct HomePayload {
    pub featured_products: Vec<Product>,
    pub reviews: Vec<Review>,
    pub articles: Vec<ArticleSummary>,
}

/// Home payload: featured products, approved reviews, latest articles.
pub async fn home(State(state): State<AppState>) -> Result<Json<HomePayload>> {
    let featured_products = ProductRepository::new(state.pool())
        .list_featured(FEATURED_LIMIT)
        .await?;
    let reviews = ReviewRepository::new(state.pool())
        .list_approved(REVIEWS_LIMIT)
        .await?;
    let articles = ArticleRepository::new(state.pool()).list_published().await?;

    Ok(Json(HomePayload {
        featured_products,
        reviews,
        articles,
    }))
}
