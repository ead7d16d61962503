//! Site article endpoints: public reads, admin management

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::article::{Article, CreateArticle, UpdateArticle},
};

use super::{AdminUser, ApiResponse};

/// List published articles (public)
#[utoipa::path(
    get,
    path = "/articles",
    tag = "articles",
    responses(
        (status = 200, description = "Published articles", body = ApiResponse<Vec<Article>>)
    )
)]
pub async fn list_articles(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<Article>>>> {
    let articles = state.services.articles.list_published().await?;
    Ok(ApiResponse::ok(articles))
}

/// Get a published article by slug (public)
#[utoipa::path(
    get,
    path = "/articles/{slug}",
    tag = "articles",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article", body = ApiResponse<Article>),
        (status = 404, description = "Article not found")
    )
)]
pub async fn get_article(
    State(state): State<crate::AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ApiResponse<Article>>> {
    let article = state.services.articles.get_published_by_slug(&slug).await?;
    Ok(ApiResponse::ok(article))
}

/// List all articles, drafts included
#[utoipa::path(
    get,
    path = "/admin/articles",
    tag = "articles",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All articles", body = ApiResponse<Vec<Article>>)
    )
)]
pub async fn list_all_articles(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
) -> AppResult<Json<ApiResponse<Vec<Article>>>> {
    let articles = state.services.articles.list_all().await?;
    Ok(ApiResponse::ok(articles))
}

/// Create an article
#[utoipa::path(
    post,
    path = "/admin/articles",
    tag = "articles",
    security(("bearer_auth" = [])),
    request_body = CreateArticle,
    responses(
        (status = 201, description = "Article created", body = ApiResponse<Article>),
        (status = 409, description = "Slug already in use")
    )
)]
pub async fn create_article(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Json(data): Json<CreateArticle>,
) -> AppResult<(StatusCode, Json<ApiResponse<Article>>)> {
    let article = state.services.articles.create(data).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(article)))
}

/// Update an article
#[utoipa::path(
    put,
    path = "/admin/articles/{id}",
    tag = "articles",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Article ID")),
    request_body = UpdateArticle,
    responses(
        (status = 200, description = "Article updated", body = ApiResponse<Article>),
        (status = 404, description = "Article not found"),
        (status = 409, description = "Slug already in use")
    )
)]
pub async fn update_article(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateArticle>,
) -> AppResult<Json<ApiResponse<Article>>> {
    let article = state.services.articles.update(id, data).await?;
    Ok(ApiResponse::ok(article))
}

/// Delete an article
#[utoipa::path(
    delete,
    path = "/admin/articles/{id}",
    tag = "articles",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Article ID")),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 404, description = "Article not found")
    )
)]
pub async fn delete_article(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.articles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
