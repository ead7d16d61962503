//! Site article model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Article record for the public site
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create article request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateArticle {
    #[validate(length(min = 1, max = 300, message = "title must be 1-300 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 200, message = "slug must be 1-200 characters"))]
    pub slug: String,
    pub body: String,
    #[serde(default)]
    pub published: bool,
}

/// Update article request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateArticle {
    #[validate(length(min = 1, max = 300, message = "title must be 1-300 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200, message = "slug must be 1-200 characters"))]
    pub slug: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
}
