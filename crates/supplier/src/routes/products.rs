//! Product management route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use amrita_core::{ProductId, Slug};

use crate::db::products::ProductRepository;
use crate::error::{PortalError, Result};
use crate::middleware::RequireSupplier;
use crate::models::{Product, ProductCreate, ProductPatch};
use crate::state::AppState;

/// Management listing payload.
#[derive(Serialize)]
pub struct ProductListPayload {
    pub products: Vec<Product>,
    pub total: usize,
}

/// Full catalog, management view.
pub async fn index(
    State(state): State<AppState>,
    RequireSupplier(_user): RequireSupplier,
) -> Result<Json<ProductListPayload>> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    Ok(Json(ProductListPayload {
        total: products.len(),
        products,
    }))
}

/// Create a product.
#[instrument(skip(state, user, product), fields(user_id = %user.id, name = %product.name))]
pub async fn create(
    State(state): State<AppState>,
    RequireSupplier(user): RequireSupplier,
    Json(product): Json<ProductCreate>,
) -> Result<(StatusCode, Json<Product>)> {
    if product.name.trim().is_empty() {
        return Err(PortalError::Validation("name is required".to_owned()));
    }
    if product.price < Decimal::ZERO {
        return Err(PortalError::Validation(
            "price cannot be negative".to_owned(),
        ));
    }
    if product.stock < 0 {
        return Err(PortalError::Validation(
            "stock cannot be negative".to_owned(),
        ));
    }

    let slug = resolve_slug(&product)?;

    let created = ProductRepository::new(state.pool())
        .create(slug.as_str(), &product)
        .await?;

    tracing::info!(product_id = %created.id, slug = %created.slug, "product created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a product.
#[instrument(skip(state, user, patch), fields(user_id = %user.id))]
pub async fn update(
    State(state): State<AppState>,
    RequireSupplier(user): RequireSupplier,
    Path(id): Path<ProductId>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    if let Some(price) = patch.price
        && price < Decimal::ZERO
    {
        return Err(PortalError::Validation(
            "price cannot be negative".to_owned(),
        ));
    }
    if let Some(stock) = patch.stock
        && stock < 0
    {
        return Err(PortalError::Validation(
            "stock cannot be negative".to_owned(),
        ));
    }

    let updated = ProductRepository::new(state.pool()).update(id, &patch).await?;

    Ok(Json(updated))
}

/// Delete a product.
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireSupplier(user): RequireSupplier,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    ProductRepository::new(state.pool()).delete(id).await?;

    tracing::info!(product_id = %id, "product deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Use the provided slug if valid, otherwise derive one from the name.
fn resolve_slug(product: &ProductCreate) -> Result<Slug> {
    match &product.slug {
        Some(raw) => Slug::parse(raw)
            .map_err(|e| PortalError::Validation(format!("invalid slug: {e}"))),
        None => Slug::from_text(&product.name).ok_or_else(|| {
            PortalError::Validation("could not derive a slug from the product name".to_owned())
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_create(name: &str, slug: Option<&str>) -> ProductCreate {
        ProductCreate {
            slug: slug.map(str::to_owned),
            name: name.to_owned(),
            description: None,
            ingredients: None,
            price: Decimal::new(44900, 2),
            stock: 10,
            featured: false,
            category_id: None,
            image_url: None,
        }
    }

    #[test]
    fn test_resolve_slug_derives_from_name() {
        let slug = resolve_slug(&base_create("Brahmi Memory Tonic", None)).expect("slug");
        assert_eq!(slug.as_str(), "brahmi-memory-tonic");
    }

    #[test]
    fn test_resolve_slug_validates_provided() {
        assert!(resolve_slug(&base_create("X", Some("valid-slug"))).is_ok());
        assert!(resolve_slug(&base_create("X", Some("Not A Slug"))).is_err());
    }
}
