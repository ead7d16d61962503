//! Rental management endpoints (admin)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::rental::{CreateRental, RentalDetails, UpdateRental},
};

use super::{AdminUser, ApiResponse};

/// Rental list filters (start-date month)
#[derive(Deserialize, ToSchema)]
pub struct RentalQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// List rentals with derived statuses
#[utoipa::path(
    get,
    path = "/rentals",
    tag = "rentals",
    security(("bearer_auth" = [])),
    params(
        ("year" = Option<i32>, Query, description = "Filter by start year"),
        ("month" = Option<u32>, Query, description = "Filter by start month (1-12)")
    ),
    responses(
        (status = 200, description = "Rental list", body = ApiResponse<Vec<RentalDetails>>)
    )
)]
pub async fn list_rentals(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Query(query): Query<RentalQuery>,
) -> AppResult<Json<ApiResponse<Vec<RentalDetails>>>> {
    let rentals = state.services.rentals.list(query.year, query.month).await?;
    Ok(ApiResponse::ok(rentals))
}

/// Get rental by ID
#[utoipa::path(
    get,
    path = "/rentals/{id}",
    tag = "rentals",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Rental ID")),
    responses(
        (status = 200, description = "Rental details", body = ApiResponse<RentalDetails>),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn get_rental(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<RentalDetails>>> {
    let rental = state.services.rentals.get(id).await?;
    Ok(ApiResponse::ok(rental))
}

/// Create a rental with its equipment instances
#[utoipa::path(
    post,
    path = "/rentals",
    tag = "rentals",
    security(("bearer_auth" = [])),
    request_body = CreateRental,
    responses(
        (status = 201, description = "Rental created", body = ApiResponse<RentalDetails>),
        (status = 400, description = "Invalid payload or date range"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn create_rental(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Json(data): Json<CreateRental>,
) -> AppResult<(StatusCode, Json<ApiResponse<RentalDetails>>)> {
    let rental = state.services.rentals.create(data).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(rental)))
}

/// Update a rental; a supplied instance list replaces the whole set
#[utoipa::path(
    put,
    path = "/rentals/{id}",
    tag = "rentals",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Rental ID")),
    request_body = UpdateRental,
    responses(
        (status = 200, description = "Rental updated", body = ApiResponse<RentalDetails>),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn update_rental(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateRental>,
) -> AppResult<Json<ApiResponse<RentalDetails>>> {
    let rental = state.services.rentals.update(id, data).await?;
    Ok(ApiResponse::ok(rental))
}

/// Delete a rental
#[utoipa::path(
    delete,
    path = "/rentals/{id}",
    tag = "rentals",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Rental ID")),
    responses(
        (status = 204, description = "Rental deleted"),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn delete_rental(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.rentals.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
