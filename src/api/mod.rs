//! API handlers for the ToolRent REST endpoints

pub mod articles;
pub mod bookings;
pub mod contact;
pub mod customers;
pub mod equipment;
pub mod expenses;
pub mod health;
pub mod lockers;
pub mod openapi;
pub mod rentals;
pub mod stats;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppError, AppState};

/// Success envelope: `{success: true, data}`
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T>
where
    T: Serialize + for<'a> ToSchema<'a>,
{
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Extractor gating admin-scoped routes behind the static bearer token
/// from configuration.
pub struct AdminUser;

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication(
                "Invalid authorization header format".to_string(),
            ));
        }

        let token = &auth_header[7..];
        let expected = &state.config.auth.admin_token;

        // An unset token locks the admin surface rather than opening it
        if expected.is_empty() {
            return Err(AppError::Authentication(
                "Admin token is not configured".to_string(),
            ));
        }

        if token != expected.as_str() {
            return Err(AppError::Authentication("Invalid token".to_string()));
        }

        Ok(AdminUser)
    }
}
