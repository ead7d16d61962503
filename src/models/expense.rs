//! Expense ledger model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Expense ledger row. No relationship to rentals.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create expense request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateExpense {
    #[validate(length(min = 1, max = 500, message = "description must be 1-500 characters"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: f64,
    pub date: NaiveDate,
    pub category: Option<String>,
}

/// Update expense request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateExpense {
    #[validate(length(min = 1, max = 500, message = "description must be 1-500 characters"))]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
}
