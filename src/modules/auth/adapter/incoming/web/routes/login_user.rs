use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest, LoginUserResponse};
use crate::shared::api::ApiResponse;
use crate::shared::validation::{FieldErrors, BLANK, REQUIRED};
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, Serialize, ToSchema)]
pub struct LoginRequestDto {
    /// Username (exact match)
    #[schema(example = "alice")]
    pub username: Option<String>,

    /// Password
    #[schema(example = "password123")]
    pub password: Option<String>,
}

impl LoginRequestDto {
    fn into_request(self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = match self.username {
            None => {
                errors.add("username", REQUIRED);
                String::new()
            }
            Some(u) if u.trim().is_empty() => {
                errors.add("username", BLANK);
                String::new()
            }
            Some(u) => u,
        };

        let password = match self.password {
            None => {
                errors.add("password", REQUIRED);
                String::new()
            }
            Some(p) if p.is_empty() => {
                errors.add("password", BLANK);
                String::new()
            }
            Some(p) => p,
        };

        errors.into_result()?;

        LoginRequest::new(username, password)
            .map_err(|e| FieldErrors::single("non_field_errors", e.to_string()))
    }
}

pub(crate) fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }

        LoginError::PasswordVerificationFailed(ref e) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        LoginError::TokenGenerationFailed(ref e) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        LoginError::QueryError(ref e) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

/// Obtain a token pair
///
/// Authenticates with username and password; returns the profile with `tokens: {refresh, access}`.
#[utoipa::path(
    post,
    path = "/api/token/",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = LoginUserResponse),
        (
            status = 400,
            description = "Missing username or password",
            body = ErrorResponse
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid credentials"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/token/")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match req.into_inner().into_request() {
        Ok(request) => request,
        Err(fields) => {
            warn!("Login rejected: missing credentials");
            return ApiResponse::validation_error(fields);
        }
    };

    info!(username = %request.username(), "Login attempt");

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.profile.id, "User logged in successfully");
            ApiResponse::ok(&response)
        }
        Err(e) => {
            if matches!(e, LoginError::InvalidCredentials) {
                warn!("Login failed: Invalid credentials");
            }
            map_login_error(e)
        }
    }
}
