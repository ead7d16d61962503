//! Storage locker endpoints (admin)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::locker::{CreateLocker, Locker, UpdateLocker},
};

use super::{AdminUser, ApiResponse};

/// List lockers
#[utoipa::path(
    get,
    path = "/lockers",
    tag = "lockers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Locker list", body = ApiResponse<Vec<Locker>>)
    )
)]
pub async fn list_lockers(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
) -> AppResult<Json<ApiResponse<Vec<Locker>>>> {
    let lockers = state.services.lockers.list().await?;
    Ok(ApiResponse::ok(lockers))
}

/// Get locker by ID
#[utoipa::path(
    get,
    path = "/lockers/{id}",
    tag = "lockers",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Locker ID")),
    responses(
        (status = 200, description = "Locker details", body = ApiResponse<Locker>),
        (status = 404, description = "Locker not found")
    )
)]
pub async fn get_locker(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Locker>>> {
    let locker = state.services.lockers.get(id).await?;
    Ok(ApiResponse::ok(locker))
}

/// Create a locker
#[utoipa::path(
    post,
    path = "/lockers",
    tag = "lockers",
    security(("bearer_auth" = [])),
    request_body = CreateLocker,
    responses(
        (status = 201, description = "Locker created", body = ApiResponse<Locker>),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_locker(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Json(data): Json<CreateLocker>,
) -> AppResult<(StatusCode, Json<ApiResponse<Locker>>)> {
    let locker = state.services.lockers.create(data).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(locker)))
}

/// Update a locker
#[utoipa::path(
    put,
    path = "/lockers/{id}",
    tag = "lockers",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Locker ID")),
    request_body = UpdateLocker,
    responses(
        (status = 200, description = "Locker updated", body = ApiResponse<Locker>),
        (status = 404, description = "Locker not found")
    )
)]
pub async fn update_locker(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateLocker>,
) -> AppResult<Json<ApiResponse<Locker>>> {
    let locker = state.services.lockers.update(id, data).await?;
    Ok(ApiResponse::ok(locker))
}

/// Delete a locker
#[utoipa::path(
    delete,
    path = "/lockers/{id}",
    tag = "lockers",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Locker ID")),
    responses(
        (status = 204, description = "Locker deleted"),
        (status = 404, description = "Locker not found")
    )
)]
pub async fn delete_locker(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.lockers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
