//! Expense ledger endpoints (admin)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::expense::{CreateExpense, Expense, UpdateExpense},
};

use super::{AdminUser, ApiResponse};

/// Expense list filters
#[derive(Deserialize, ToSchema)]
pub struct ExpenseQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// List expenses
#[utoipa::path(
    get,
    path = "/expenses",
    tag = "expenses",
    security(("bearer_auth" = [])),
    params(
        ("year" = Option<i32>, Query, description = "Filter by year"),
        ("month" = Option<u32>, Query, description = "Filter by month (1-12)")
    ),
    responses(
        (status = 200, description = "Expense list", body = ApiResponse<Vec<Expense>>)
    )
)]
pub async fn list_expenses(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Query(query): Query<ExpenseQuery>,
) -> AppResult<Json<ApiResponse<Vec<Expense>>>> {
    let expenses = state.services.expenses.list(query.year, query.month).await?;
    Ok(ApiResponse::ok(expenses))
}

/// Get expense by ID
#[utoipa::path(
    get,
    path = "/expenses/{id}",
    tag = "expenses",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Expense ID")),
    responses(
        (status = 200, description = "Expense details", body = ApiResponse<Expense>),
        (status = 404, description = "Expense not found")
    )
)]
pub async fn get_expense(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Expense>>> {
    let expense = state.services.expenses.get(id).await?;
    Ok(ApiResponse::ok(expense))
}

/// Create an expense
#[utoipa::path(
    post,
    path = "/expenses",
    tag = "expenses",
    security(("bearer_auth" = [])),
    request_body = CreateExpense,
    responses(
        (status = 201, description = "Expense created", body = ApiResponse<Expense>),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_expense(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Json(data): Json<CreateExpense>,
) -> AppResult<(StatusCode, Json<ApiResponse<Expense>>)> {
    let expense = state.services.expenses.create(data).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(expense)))
}

/// Update an expense
#[utoipa::path(
    put,
    path = "/expenses/{id}",
    tag = "expenses",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Expense ID")),
    request_body = UpdateExpense,
    responses(
        (status = 200, description = "Expense updated", body = ApiResponse<Expense>),
        (status = 404, description = "Expense not found")
    )
)]
pub async fn update_expense(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateExpense>,
) -> AppResult<Json<ApiResponse<Expense>>> {
    let expense = state.services.expenses.update(id, data).await?;
    Ok(ApiResponse::ok(expense))
}

/// Delete an expense
#[utoipa::path(
    delete,
    path = "/expenses/{id}",
    tag = "expenses",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Expense ID")),
    responses(
        (status = 204, description = "Expense deleted"),
        (status = 404, description = "Expense not found")
    )
)]
pub async fn delete_expense(
    State(state): State<crate::AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.expenses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
