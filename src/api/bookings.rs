//! Booking endpoints: public creation, admin management

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingStatus, CreateBooking, UpdateBooking},
};

use super::{AdminUser, ApiResponse};

/// Booking list filters
#[derive(Deserialize, ToSchema)]
pub struct BookingQuery {
    pub status: Option<BookingStatus>,
    pub equipment_id: Option<i64>,
}

/// Status transition request
#[derive(Deserialize, ToSchema)]
pub struct SetBookingStatus {
    pub status: BookingStatus,
}

/// Create a booking (public)
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = ApiResponse<Booking>),
        (status = 400, description = "Invalid payload or date range"),
        (status = 404, description = "Equipment not found"),
        (status = 409, description = "Dates conflict with an existing booking")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<ApiResponse<Booking>>)> {
    let booking = state.services.bookings.create(data).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(booking)))
}

/// List bookings
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("status" = Option<BookingStatus>, Query, description = "Filter by status"),
        ("equipment_id" = Option<i64>, Query, description = "Filter by equipment")
    ),
    responses(
        (status = 200, description = "Booking list", body = ApiResponse<Vec<Booking>>)
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Query(query): Query<BookingQuery>,
) -> AppResult<Json<ApiResponse<Vec<Booking>>>> {
    let bookings = state
        .services
        .bookings
        .list(query.status, query.equipment_id)
        .await?;
    Ok(ApiResponse::ok(bookings))
}

/// Get booking by ID
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<Booking>),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let booking = state.services.bookings.get(id).await?;
    Ok(ApiResponse::ok(booking))
}

/// Update a booking; date changes are re-checked and re-priced
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Booking ID")),
    request_body = UpdateBooking,
    responses(
        (status = 200, description = "Booking updated", body = ApiResponse<Booking>),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Dates conflict with an existing booking")
    )
)]
pub async fn update_booking(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateBooking>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let booking = state.services.bookings.update(id, data).await?;
    Ok(ApiResponse::ok(booking))
}

/// Set booking status
#[utoipa::path(
    put,
    path = "/bookings/{id}/status",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Booking ID")),
    request_body = SetBookingStatus,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<Booking>),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Confirmation would overlap another booking")
    )
)]
pub async fn set_booking_status(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(data): Json<SetBookingStatus>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let booking = state.services.bookings.set_status(id, data.status).await?;
    Ok(ApiResponse::ok(booking))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.bookings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
