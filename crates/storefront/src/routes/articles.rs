//! Article and doctor route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use amrita_core::DoctorId;

use crate::db::articles::ArticleRepository;
use crate::error::{AppError, Result};
use crate::models::{Article, ArticleSummary, Doctor};
use crate::state::AppState;

/// Article detail payload: the article plus its rendered body and byline.
#[derive(Serialize)]
pub struct ArticleDetailPayload {
    #[serde(flatten)]
    pub article: Article,
    /// Body rendered from markdown to HTML.
    pub content_html: String,
    pub doctor: Option<Doctor>,
}

/// Doctor profile payload with their published articles.
#[derive(Serialize)]
pub struct DoctorPayload {
    pub doctor: Doctor,
    pub articles: Vec<ArticleSummary>,
}

/// Published articles, newest first.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<ArticleSummary>>> {
    let articles = ArticleRepository::new(state.pool()).list_published().await?;
    Ok(Json(articles))
}

/// Article detail, markdown rendered to HTML.
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleDetailPayload>> {
    let repo = ArticleRepository::new(state.pool());

    let article = repo
        .get_published_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("article {slug}")))?;

    let doctor = match article.doctor_id {
        Some(id) => repo.get_doctor(id).await?,
        None => None,
    };

    let content_html = render_markdown(&article.content);

    Ok(Json(ArticleDetailPayload {
        article,
        content_html,
        doctor,
    }))
}

/// Doctor profile with their published articles.
pub async fn doctor(
    State(state): State<AppState>,
    Path(id): Path<DoctorId>,
) -> Result<Json<DoctorPayload>> {
    let repo = ArticleRepository::new(state.pool());

    let doctor = repo
        .get_doctor(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("doctor {id}")))?;

    let articles = repo.list_published_by_doctor(id).await?;

    Ok(Json(DoctorPayload { doctor, articles }))
}

/// Render article markdown to HTML.
fn render_markdown(markdown: &str) -> String {
    comrak::markdown_to_html(markdown, &comrak::Options::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_basic() {
        let html = render_markdown("# Doshas\n\nBalance *matters*.");
        assert!(html.contains("<h1>"));
        assert!(html.contains("<em>matters</em>"));
    }

    #[test]
    fn test_render_markdown_escapes_raw_html() {
        // comrak escapes raw HTML unless explicitly enabled
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }
}
