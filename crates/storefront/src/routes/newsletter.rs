//! Newsletter subscription route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use amrita_core::Email;

use crate::db::RepositoryError;
use crate::db::content::ContentRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    pub email: String,
}

/// Subscription outcome.
#[derive(Serialize)]
pub struct SubscribePayload {
    pub subscribed: bool,
    pub already_subscribed: bool,
}

/// Subscribe to the newsletter.
///
/// Subscribing an email that is already on the list is reported as
/// `already_subscribed`, not as an error.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(form): Json<SubscribeForm>,
) -> Result<Json<SubscribePayload>> {
    let email = Email::parse(&form.email)
        .map_err(|e| AppError::Validation(format!("invalid email: {e}")))?;

    match ContentRepository::new(state.pool())
        .subscribe_newsletter(&email)
        .await
    {
        Ok(()) => Ok(Json(SubscribePayload {
            subscribed: true,
            already_subscribed: false,
        })),
        Err(RepositoryError::Conflict(_)) => Ok(Json(SubscribePayload {
            subscribed: true,
            already_subscribed: true,
        })),
        Err(other) => Err(AppError::Database(other)),
    }
}
