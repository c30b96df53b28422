//! Marketing content page handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::content::ContentRepository;
use crate::error::Result;
use crate::models::ContentSection;
use crate::state::AppState;

/// Story page payload: ordered content sections.
#[derive(Serialize)]
pub struct StoryPayload {
    pub sections: Vec<ContentSection>,
}

/// "Our Story" page sections in display order.
pub async fn our_story(State(state): State<AppState>) -> Result<Json<StoryPayload>> {
    let sections = ContentRepository::new(state.pool()).list_sections().await?;
    Ok(Json(StoryPayload { sections }))
}
