//! Product route handlers.
//!
//! The listing endpoint runs the catalog pipeline over the cached full
//! product list; every criteria change is a fresh, whole recomputation.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;

use crate::catalog::{self, CatalogQuery};
use crate::db::products::ProductRepository;
use crate::db::reviews::ReviewRepository;
use crate::error::{AppError, Result};
use crate::models::{Category, Product, Review};
use crate::state::AppState;

/// Product listing payload.
///
/// The criteria are echoed back so the client can render its active-filter
/// state (and a "no results, reset filters" affordance when `products` is
/// empty).
#[derive(Serialize)]
pub struct ProductListPayload {
    pub products: Vec<Product>,
    pub total: usize,
    /// Whether any narrowing criterion was active for this listing.
    pub filtered: bool,
    pub criteria: CatalogQuery,
}

/// Product detail payload.
#[derive(Serialize)]
pub struct ProductDetailPayload {
    pub product: Product,
    pub reviews: Vec<Review>,
}

/// Product listing with filter/sort criteria.
pub async fn index(
    State(state): State<AppState>,
    Query(criteria): Query<CatalogQuery>,
) -> Result<Json<ProductListPayload>> {
    let all = state.catalog_products().await?;
    let products = catalog::filter_and_sort(&all, &criteria);

    Ok(Json(ProductListPayload {
        total: products.len(),
        filtered: criteria.is_filtered(),
        products,
        criteria,
    }))
}

/// Product detail with its approved reviews.
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductDetailPayload>> {
    let product = ProductRepository::new(state.pool())
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {slug}")))?;

    let reviews = ReviewRepository::new(state.pool())
        .list_approved_for_product(&product.name)
        .await?;

    Ok(Json(ProductDetailPayload { product, reviews }))
}

/// Category list.
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = ProductRepository::new(state.pool()).list_categories().await?;
    Ok(Json(categories))
}
