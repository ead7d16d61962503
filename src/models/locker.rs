//! Storage locker model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Storage locker record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Locker {
    pub id: i64,
    pub label: String,
    pub size: Option<String>,
    pub monthly_price: f64,
    pub is_occupied: bool,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub rented_from: Option<NaiveDate>,
    pub rented_until: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create locker request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLocker {
    #[validate(length(min = 1, max = 50, message = "label must be 1-50 characters"))]
    pub label: String,
    pub size: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub monthly_price: f64,
    pub notes: Option<String>,
}

/// Update locker request, including occupancy changes
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLocker {
    #[validate(length(min = 1, max = 50, message = "label must be 1-50 characters"))]
    pub label: Option<String>,
    pub size: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub monthly_price: Option<f64>,
    pub is_occupied: Option<bool>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub rented_from: Option<NaiveDate>,
    pub rented_until: Option<NaiveDate>,
    pub notes: Option<String>,
}
