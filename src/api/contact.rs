//! Public contact form endpoint

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppResult;

use super::ApiResponse;

/// Contact form payload
#[derive(Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 120, message = "name must be 1-120 characters"))]
    pub name: String,
    #[validate(length(min = 3, max = 32, message = "phone must be 3-32 characters"))]
    pub phone: String,
    #[validate(length(min = 1, max = 2000, message = "message must be 1-2000 characters"))]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContactResponse {
    pub received: bool,
}

/// Submit a contact request; the operator is notified out-of-band
#[utoipa::path(
    post,
    path = "/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 202, description = "Request accepted", body = ApiResponse<ContactResponse>),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn submit_contact(
    State(state): State<crate::AppState>,
    Json(data): Json<ContactRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ContactResponse>>)> {
    data.validate()?;

    state.services.notifier.dispatch(format!(
        "Contact request from {} ({}): {}",
        data.name, data.phone, data.message
    ));

    Ok((
        StatusCode::ACCEPTED,
        ApiResponse::ok(ContactResponse { received: true }),
    ))
}
