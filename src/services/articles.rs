//! Site article service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::article::{Article, CreateArticle, UpdateArticle},
    repository::Repository,
};

#[derive(Clone)]
pub struct ArticlesService {
    repository: Repository,
}

impl ArticlesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Published articles for the public site
    pub async fn list_published(&self) -> AppResult<Vec<Article>> {
        self.repository.articles.list(true).await
    }

    /// All articles for the admin back-office
    pub async fn list_all(&self) -> AppResult<Vec<Article>> {
        self.repository.articles.list(false).await
    }

    pub async fn get(&self, id: i64) -> AppResult<Article> {
        self.repository.articles.get_by_id(id).await
    }

    pub async fn get_published_by_slug(&self, slug: &str) -> AppResult<Article> {
        self.repository.articles.get_published_by_slug(slug).await
    }

    pub async fn create(&self, data: CreateArticle) -> AppResult<Article> {
        data.validate()?;
        if self.repository.articles.slug_exists(&data.slug, None).await? {
            return Err(AppError::Conflict(format!(
                "Slug '{}' is already in use",
                data.slug
            )));
        }
        self.repository.articles.create(&data).await
    }

    pub async fn update(&self, id: i64, data: UpdateArticle) -> AppResult<Article> {
        data.validate()?;
        if let Some(ref slug) = data.slug {
            if self.repository.articles.slug_exists(slug, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "Slug '{}' is already in use",
                    slug
                )));
            }
        }
        self.repository.articles.update(id, &data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.articles.delete(id).await
    }
}
