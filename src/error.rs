//! Error types for the ToolRent server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid payload")]
    Payload(#[from] validator::ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body: `{success: false, message, errors?}`
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match &self {
            AppError::Authentication(msg) => {
                (StatusCode::UNAUTHORIZED, msg.clone(), None)
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, msg.clone(), None)
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone(), None)
            }
            AppError::Payload(errs) => {
                let list = errs
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| match &e.message {
                            Some(msg) => format!("{}: {}", field, msg),
                            None => format!("{}: invalid value", field),
                        })
                    })
                    .collect::<Vec<_>>();
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid payload".to_string(),
                    Some(list),
                )
            }
            AppError::Conflict(msg) | AppError::BusinessRule(msg) => {
                (StatusCode::CONFLICT, msg.clone(), None)
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                    None,
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            message,
            errors,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
