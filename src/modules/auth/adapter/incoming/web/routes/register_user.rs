use crate::api::schemas::ErrorResponse;
use crate::modules::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info, warn};

pub(crate) fn map_create_user_error(err: CreateUserError) -> HttpResponse {
    match err {
        CreateUserError::Validation(fields) => ApiResponse::validation_error(fields),

        CreateUserError::UserAlreadyExists => {
            warn!("Registration lost a uniqueness race");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists")
        }

        CreateUserError::HashingFailed(e) => {
            error!("Password hashing failed: {}", e);
            ApiResponse::internal_error()
        }

        CreateUserError::TokenGenerationFailed(e) => {
            error!("Token generation failed after registration: {}", e);
            ApiResponse::internal_error()
        }

        CreateUserError::RepositoryError(e) => {
            error!("Repository error during registration: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates the account and returns the profile with a fresh token pair.
#[utoipa::path(
    post,
    path = "/register/",
    tag = "auth",
    request_body(
        content = CreateUserInput,
        example = json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "password123",
            "password2": "password123",
            "first_name": "Alice",
            "last_name": "Smith",
            "age": 30,
            "city": "Oslo",
            "gender": "F"
        })
    ),
    responses(
        (status = 201, description = "User registered", body = CreateUserOutput),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid input",
                    "fields": { "non_field_errors": ["Passwords do not match"] }
                }
            })
        ),
        (status = 409, description = "Username or email taken concurrently", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/register/")]
pub async fn register_user_handler(
    req: web::Json<CreateUserInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.register_user_use_case.execute(req.into_inner()).await {
        Ok(output) => {
            info!(user_id = %output.profile.id, "User registered");
            ApiResponse::created(&output)
        }
        Err(e) => map_create_user_error(e),
    }
}
