use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::refresh_token::{
    RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::shared::api::ApiResponse;
use crate::shared::validation::{FieldErrors, BLANK, REQUIRED};
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    /// Refresh token issued at login or registration
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh: Option<String>,
}

pub(crate) fn map_refresh_error(err: RefreshTokenError) -> HttpResponse {
    match err {
        RefreshTokenError::TokenExpired => {
            warn!("Refresh rejected: token expired");
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Token has expired")
        }
        RefreshTokenError::InvalidTokenType => {
            warn!("Refresh rejected: not a refresh token");
            ApiResponse::unauthorized("INVALID_TOKEN_TYPE", "Invalid token type")
        }
        RefreshTokenError::TokenInvalid
        | RefreshTokenError::TokenNotYetValid
        | RefreshTokenError::InvalidSignature => {
            warn!("Refresh rejected: {}", err);
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        RefreshTokenError::TokenGenerationFailed(ref e) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error()
        }
    }
}

/// Refresh the access token
///
/// Exchanges a refresh token for a new access token. With rotation enabled a new
/// refresh token is returned as well.
#[utoipa::path(
    post,
    path = "/api/token/refresh/",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (
            status = 200,
            description = "New access token",
            body = RefreshTokenResponse,
            example = json!({ "access": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." })
        ),
        (status = 400, description = "Missing refresh token", body = ErrorResponse),
        (status = 401, description = "Invalid, expired or wrong-type token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/token/refresh/")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw = match req.into_inner().refresh {
        None => return ApiResponse::validation_error(FieldErrors::single("refresh", REQUIRED)),
        Some(raw) => raw,
    };

    let request = match RefreshTokenRequest::new(raw) {
        Ok(request) => request,
        Err(_) => return ApiResponse::validation_error(FieldErrors::single("refresh", BLANK)),
    };

    match data.refresh_token_use_case.execute(request).await {
        Ok(response) => ApiResponse::ok(&response),
        Err(e) => map_refresh_error(e),
    }
}
