//! Authentication route handlers.
//!
//! Successful register/login writes the [`CurrentUser`] context object into
//! the session; everything downstream reads it via the auth extractors.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use amrita_core::Role;

use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::middleware::RequireAuth;
use crate::models::{CurrentUser, session_keys};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    /// `user` (default) or `supplier`; admin is never self-assignable.
    #[serde(default)]
    pub role: Role,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Register a new account and log it in.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<RegisterForm>,
) -> Result<(StatusCode, Json<CurrentUser>)> {
    let user = AuthService::new(state.pool())
        .register(
            &form.email,
            &form.password,
            form.full_name.as_deref(),
            form.role,
        )
        .await?;

    start_session(&session, &user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Login with email and password.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<Json<CurrentUser>> {
    let user = AuthService::new(state.pool())
        .login(&form.email, &form.password)
        .await?;

    start_session(&session, &user).await?;

    Ok(Json(user))
}

/// Logout and destroy the session.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Json<serde_json::Value>> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("failed to destroy session: {e}")))?;
    clear_sentry_user();

    Ok(Json(serde_json::json!({ "ok": true })))
}

/// The session-attached identity (id, email, name, role).
pub async fn me(RequireAuth(user): RequireAuth) -> Json<CurrentUser> {
    Json(user)
}

/// Rotate the session ID and store the logged-in user.
async fn start_session(session: &Session, user: &CurrentUser) -> Result<()> {
    // Rotate to defeat session fixation
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(format!("failed to cycle session: {e}")))?;
    session
        .insert(session_keys::CURRENT_USER, user)
        .await
        .map_err(|e| AppError::Internal(format!("failed to write session: {e}")))?;

    set_sentry_user(&user.id, Some(user.email.as_str()));
    Ok(())
}
