//! Articles repository for database operations

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::article::{Article, CreateArticle, UpdateArticle},
};

#[derive(Clone)]
pub struct ArticlesRepository {
    pool: Pool<Sqlite>,
}

impl ArticlesRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List articles; the public site only sees published ones
    pub async fn list(&self, published_only: bool) -> AppResult<Vec<Article>> {
        let query = if published_only {
            "SELECT * FROM articles WHERE published = 1 ORDER BY created_at DESC"
        } else {
            "SELECT * FROM articles ORDER BY created_at DESC"
        };
        let rows = sqlx::query_as::<_, Article>(query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get article by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Article> {
        sqlx::query_as::<_, Article>("SELECT * FROM articles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article {} not found", id)))
    }

    /// Get a published article by slug
    pub async fn get_published_by_slug(&self, slug: &str) -> AppResult<Article> {
        sqlx::query_as::<_, Article>("SELECT * FROM articles WHERE slug = ? AND published = 1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article '{}' not found", slug)))
    }

    /// Whether a slug is already taken by another article
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM articles WHERE slug = ? AND id != ?)",
        )
        .bind(slug)
        .bind(exclude_id.unwrap_or(0))
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Create an article
    pub async fn create(&self, data: &CreateArticle) -> AppResult<Article> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Article>(
            r#"
            INSERT INTO articles (title, slug, body, published, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.slug)
        .bind(&data.body)
        .bind(data.published)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an article, touching only the supplied fields
    pub async fn update(&self, id: i64, data: &UpdateArticle) -> AppResult<Article> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = ?".to_string()];

        if data.title.is_some() {
            sets.push("title = ?".to_string());
        }
        if data.slug.is_some() {
            sets.push("slug = ?".to_string());
        }
        if data.body.is_some() {
            sets.push("body = ?".to_string());
        }
        if data.published.is_some() {
            sets.push("published = ?".to_string());
        }

        let query = format!(
            "UPDATE articles SET {} WHERE id = ? RETURNING *",
            sets.join(", ")
        );

        let mut builder = sqlx::query_as::<_, Article>(&query).bind(now);
        if let Some(ref val) = data.title {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.slug {
            builder = builder.bind(val);
        }
        if let Some(ref val) = data.body {
            builder = builder.bind(val);
        }
        if let Some(val) = data.published {
            builder = builder.bind(val);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article {} not found", id)))
    }

    /// Delete an article
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Article {} not found", id)));
        }
        Ok(())
    }
}
