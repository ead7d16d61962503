//! Equipment catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, Equipment, EquipmentDetails, UpdateEquipment},
};

use super::{AdminUser, ApiResponse};

/// Price quote query: inclusive calendar range
#[derive(Deserialize, ToSchema)]
pub struct QuoteQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Price quote for a date range
#[derive(Serialize, ToSchema)]
pub struct QuoteResponse {
    pub equipment_id: i64,
    pub duration_days: i64,
    pub daily_rate: f64,
    pub total_price: f64,
}

/// List the catalog with derived availability
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment list", body = ApiResponse<Vec<EquipmentDetails>>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<EquipmentDetails>>>> {
    let equipment = state.services.catalog.list().await?;
    Ok(ApiResponse::ok(equipment))
}

/// Get one catalog entry
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = ApiResponse<EquipmentDetails>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<EquipmentDetails>>> {
    let equipment = state.services.catalog.get(id).await?;
    Ok(ApiResponse::ok(equipment))
}

/// Price quote for a date range, without creating anything
#[utoipa::path(
    get,
    path = "/equipment/{id}/quote",
    tag = "equipment",
    params(
        ("id" = i64, Path, description = "Equipment ID"),
        ("start_date" = NaiveDate, Query, description = "First rental day"),
        ("end_date" = NaiveDate, Query, description = "Last rental day")
    ),
    responses(
        (status = 200, description = "Resolved price", body = ApiResponse<QuoteResponse>),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn quote_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Query(query): Query<QuoteQuery>,
) -> AppResult<Json<ApiResponse<QuoteResponse>>> {
    let (duration_days, daily_rate, total_price) = state
        .services
        .catalog
        .quote(id, query.start_date, query.end_date)
        .await?;

    Ok(ApiResponse::ok(QuoteResponse {
        equipment_id: id,
        duration_days,
        daily_rate,
        total_price,
    }))
}

/// Create a catalog entry
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = ApiResponse<Equipment>),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<ApiResponse<Equipment>>)> {
    let equipment = state.services.catalog.create(data).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(equipment)))
}

/// Update a catalog entry
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = ApiResponse<Equipment>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<ApiResponse<Equipment>>> {
    let equipment = state.services.catalog.update(id, data).await?;
    Ok(ApiResponse::ok(equipment))
}

/// Delete a catalog entry
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
