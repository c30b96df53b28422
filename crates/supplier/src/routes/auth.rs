//! Portal authentication route handlers.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use axum::{Json, extract::State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::db::users::UserRepository;
use crate::error::{PortalError, Result};
use crate::models::{PortalUser, session_keys};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login with storefront credentials; the profile role must grant portal
/// access.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<Json<PortalUser>> {
    let email = form.email.trim().to_lowercase();

    let credentials = UserRepository::new(state.pool())
        .get_credentials(&email)
        .await?
        .ok_or_else(|| PortalError::Unauthorized("Invalid credentials".to_owned()))?;

    verify_password(&form.password, &credentials.password_hash)?;

    let role = credentials.role()?;
    if !role.can_manage_catalog() {
        return Err(PortalError::Forbidden("Supplier access required".to_owned()));
    }

    let user = PortalUser {
        id: credentials.user_id,
        email: credentials.email,
        full_name: credentials.full_name,
        role,
    };

    session
        .cycle_id()
        .await
        .map_err(|e| PortalError::Internal(format!("failed to cycle session: {e}")))?;
    session
        .insert(session_keys::PORTAL_USER, &user)
        .await
        .map_err(|e| PortalError::Internal(format!("failed to write session: {e}")))?;

    Ok(Json(user))
}

/// Logout and destroy the session.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Json<serde_json::Value>> {
    session
        .flush()
        .await
        .map_err(|e| PortalError::Internal(format!("failed to destroy session: {e}")))?;

    Ok(Json(serde_json::json!({ "ok": true })))
}

/// Verify a password against a stored argon2 hash.
fn verify_password(password: &str, hash: &str) -> Result<()> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| PortalError::Unauthorized("Invalid credentials".to_owned()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| PortalError::Unauthorized("Invalid credentials".to_owned()))
}
