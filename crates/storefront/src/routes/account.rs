//! Account route handlers: profile and addresses.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use amrita_core::AddressId;

use crate::db::addresses::AddressRepository;
use crate::db::users::UserRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Address, CurrentUser, Profile, address::AddressPatch, address::NewAddress,
    session_keys};
use crate::state::AppState;

/// Profile update form data.
#[derive(Debug, Deserialize)]
pub struct ProfilePatch {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Get the user's profile.
pub async fn profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Profile>> {
    let profile = UserRepository::new(state.pool())
        .get_profile(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("profile not found".to_owned()))?;

    Ok(Json(profile))
}

/// Update the user's display fields and refresh the session copy.
#[instrument(skip(state, session, user, patch), fields(user_id = %user.id))]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<Profile>> {
    let profile = UserRepository::new(state.pool())
        .update_profile(user.id, patch.full_name.as_deref(), patch.avatar_url.as_deref())
        .await?;

    // Keep the session context object in sync with the stored profile
    let refreshed = CurrentUser {
        full_name: profile.full_name.clone(),
        ..user
    };
    session
        .insert(session_keys::CURRENT_USER, &refreshed)
        .await
        .map_err(|e| AppError::Internal(format!("failed to write session: {e}")))?;

    Ok(Json(profile))
}

/// List the user's addresses.
pub async fn addresses(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<Address>>> {
    let addresses = AddressRepository::new(state.pool()).list(user.id).await?;
    Ok(Json(addresses))
}

/// Create an address.
#[instrument(skip(state, user, address), fields(user_id = %user.id))]
pub async fn create_address(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(address): Json<NewAddress>,
) -> Result<(StatusCode, Json<Address>)> {
    validate_address(&address)?;

    let created = AddressRepository::new(state.pool())
        .create(user.id, &address)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an address.
#[instrument(skip(state, user, patch), fields(user_id = %user.id))]
pub async fn update_address(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(address_id): Path<AddressId>,
    Json(patch): Json<AddressPatch>,
) -> Result<Json<Address>> {
    let updated = AddressRepository::new(state.pool())
        .update(user.id, address_id, &patch)
        .await?;

    Ok(Json(updated))
}

/// Delete an address.
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_address(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(address_id): Path<AddressId>,
) -> Result<StatusCode> {
    let deleted = AddressRepository::new(state.pool())
        .delete(user.id, address_id)
        .await?;

    if !deleted {
        return Err(AppError::NotFound("address not found".to_owned()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// First-error validation for a new address.
fn validate_address(address: &NewAddress) -> Result<()> {
    let required = [
        ("full name", &address.full_name),
        ("phone", &address.phone),
        ("address line 1", &address.address_line1),
        ("city", &address.city),
        ("state", &address.state),
        ("pincode", &address.pincode),
    ];
    for (label, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{label} is required")));
        }
    }
    Ok(())
}
