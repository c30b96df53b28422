//! Article and doctor models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use amrita_core::{ArticleId, DoctorId};

/// An article as listed on the articles index, with its doctor byline.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub read_time: Option<i32>,
    pub image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub doctor_id: Option<DoctorId>,
    pub doctor_name: Option<String>,
}

/// A full article, including its markdown body.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Article {
    pub id: ArticleId,
    pub slug: String,
    pub title: String,
    /// Markdown source; rendered to HTML in the detail response.
    pub content: String,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub read_time: Option<i32>,
    pub image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub doctor_id: Option<DoctorId>,
}

/// A doctor profile (article authors).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub title: String,
    pub specialization: String,
    pub bio: Option<String>,
    pub certifications: Vec<String>,
    pub experience_years: Option<i32>,
    pub image_url: Option<String>,
}
