use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct UsernameQuery {
    /// Username to look up (case-insensitive)
    pub username: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct EmailQuery {
    /// Email to look up (case-insensitive)
    pub email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    #[schema(example = true)]
    pub available: bool,
}

/// Check whether a username is free
#[utoipa::path(
    get,
    path = "/api/check-username/",
    tag = "auth",
    params(UsernameQuery),
    responses(
        (status = 200, description = "Availability", body = AvailabilityResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/check-username/")]
pub async fn check_username_handler(
    query: web::Query<UsernameQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = query.into_inner().username.unwrap_or_default();

    match data
        .check_availability_use_case
        .username_available(&username)
        .await
    {
        Ok(available) => ApiResponse::ok(&AvailabilityResponse { available }),
        Err(e) => {
            error!("Username availability check failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Check whether an email is free
#[utoipa::path(
    get,
    path = "/api/check-email/",
    tag = "auth",
    params(EmailQuery),
    responses(
        (status = 200, description = "Availability", body = AvailabilityResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/check-email/")]
pub async fn check_email_handler(
    query: web::Query<EmailQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let email = query.into_inner().email.unwrap_or_default();

    match data.check_availability_use_case.email_available(&email).await {
        Ok(available) => ApiResponse::ok(&AvailabilityResponse { available }),
        Err(e) => {
            error!("Email availability check failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
