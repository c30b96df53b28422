//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use sqlx::PgPool;

use crate::config::StorefrontConfig;
use crate::db::products::ProductRepository;
use crate::error::AppError;
use crate::models::Product;

/// Cache key for catalog data.
///
/// The catalog is cached wholesale; every listing is derived from the full
/// product list by the pure pipeline in [`crate::catalog`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
enum CacheKey {
    Products,
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: PgPool,
    catalog: Cache<CacheKey, Arc<Vec<Product>>>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `pool` - `PostgreSQL` connection pool
    #[must_use]
    pub fn new(config: StorefrontConfig, pool: PgPool) -> Self {
        let catalog = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(config.catalog_ttl_secs))
            .build();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                catalog,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get the full product list, served read-through from the catalog cache.
    ///
    /// The cached list expires after the configured TTL, which is the
    /// "explicit re-fetch" that picks up supplier-side mutations.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the list has to be fetched and the query fails.
    pub async fn catalog_products(&self) -> Result<Arc<Vec<Product>>, AppError> {
        self.inner
            .catalog
            .try_get_with(CacheKey::Products, async {
                let products = ProductRepository::new(&self.inner.pool).list_all().await?;
                Ok::<_, crate::db::RepositoryError>(Arc::new(products))
            })
            .await
            .map_err(|e| AppError::Internal(format!("catalog fetch failed: {e}")))
    }
}
