//! Customer overview endpoint (admin)

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::{AdminUser, ApiResponse};

/// One customer aggregated from rentals and bookings, keyed by phone
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomerSummary {
    pub phone: String,
    pub name: String,
    pub rentals_count: i64,
    pub bookings_count: i64,
    pub total_spent: f64,
    pub last_date: NaiveDate,
}

/// List customers
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Customer list", body = ApiResponse<Vec<CustomerSummary>>)
    )
)]
pub async fn list_customers(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
) -> AppResult<Json<ApiResponse<Vec<CustomerSummary>>>> {
    let customers = state.services.rentals.list_customers().await?;
    Ok(ApiResponse::ok(customers))
}
