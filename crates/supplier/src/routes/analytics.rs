//! Analytics route handlers.

use axum::{Json, extract::State};

use crate::db::analytics::AnalyticsRepository;
use crate::error::Result;
use crate::middleware::RequireSupplier;
use crate::models::AnalyticsSummary;
use crate::state::AppState;

/// Aggregate counts and revenue for the analytics tab.
pub async fn summary(
    State(state): State<AppState>,
    RequireSupplier(_user): RequireSupplier,
) -> Result<Json<AnalyticsSummary>> {
    let summary = AnalyticsRepository::new(state.pool()).summary().await?;
    Ok(Json(summary))
}
