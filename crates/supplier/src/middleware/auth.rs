//! Portal authentication extractor.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_sessions::Session;

use crate::models::{PortalUser, session_keys};

/// Extractor that requires a logged-in user with a portal role.
///
/// The role check happened at login; the extractor re-checks the stored role
/// anyway so a downgraded account is locked out as soon as its session is
/// re-read.
pub struct RequireSupplier(pub PortalUser);

/// Rejection for missing or insufficient portal credentials.
pub enum PortalRejection {
    /// Nobody is logged in.
    Unauthorized,
    /// Logged in, but the role does not grant portal access.
    Forbidden,
}

impl IntoResponse for PortalRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Please login to continue",
                    "login": "/auth/login",
                })),
            )
                .into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(json!({ "error": "Supplier access required" })),
            )
                .into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireSupplier
where
    S: Send + Sync,
{
    type Rejection = PortalRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(PortalRejection::Unauthorized)?;

        let user: PortalUser = session
            .get(session_keys::PORTAL_USER)
            .await
            .ok()
            .flatten()
            .ok_or(PortalRejection::Unauthorized)?;

        if !user.role.can_manage_catalog() {
            return Err(PortalRejection::Forbidden);
        }

        Ok(Self(user))
    }
}
