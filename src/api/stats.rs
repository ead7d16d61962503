//! Statistics endpoints (admin)

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;

use super::{AdminUser, ApiResponse};

/// Headline figures for the admin dashboard
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub equipment_count: i64,
    pub active_rentals: i64,
    pub overdue_rentals: i64,
    pub pending_bookings: i64,
    /// Rental + delivery revenue booked this month
    pub month_revenue: f64,
    pub month_expenses: f64,
}

/// One month of revenue/expense figures
#[derive(Serialize, ToSchema)]
pub struct MonthlySummary {
    pub month: u32,
    pub rentals_count: i64,
    pub rental_revenue: f64,
    pub delivery_revenue: f64,
    pub delivery_costs: f64,
    pub expenses_total: f64,
    pub net: f64,
}

#[derive(Deserialize, ToSchema)]
pub struct MonthlyQuery {
    pub year: i32,
}

/// Dashboard overview
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Headline statistics", body = ApiResponse<StatsResponse>)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
) -> AppResult<Json<ApiResponse<StatsResponse>>> {
    let stats = state.services.stats.overview().await?;
    Ok(ApiResponse::ok(stats))
}

/// Monthly revenue/expense summary for one year
#[utoipa::path(
    get,
    path = "/stats/monthly",
    tag = "stats",
    security(("bearer_auth" = [])),
    params(
        ("year" = i32, Query, description = "Calendar year")
    ),
    responses(
        (status = 200, description = "Per-month figures", body = ApiResponse<Vec<MonthlySummary>>)
    )
)]
pub async fn get_monthly_stats(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Query(query): Query<MonthlyQuery>,
) -> AppResult<Json<ApiResponse<Vec<MonthlySummary>>>> {
    let summary = state.services.stats.monthly(query.year).await?;
    Ok(ApiResponse::ok(summary))
}
