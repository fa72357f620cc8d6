use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::{
            domain::entities::{UserId, UserProfile},
            use_cases::update_profile::{UpdateMode, UpdateUserError, UpdateUserInput},
        },
    },
    shared::{api::ApiResponse, patch::PatchField},
    AppState,
};
use actix_web::{patch, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Profile form. Password and `date_joined` are not editable here.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "alice")]
    pub username: Option<String>,
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    /// `null` clears the age
    #[serde(default)]
    #[schema(value_type = Option<i32>, example = 31)]
    pub age: PatchField<i32>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Bergen")]
    pub city: PatchField<String>,

    /// `M` or `F`
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "F")]
    pub gender: PatchField<String>,
}

impl From<UpdateUserRequest> for UpdateUserInput {
    fn from(req: UpdateUserRequest) -> Self {
        UpdateUserInput {
            username: req.username,
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            age: req.age,
            city: req.city,
            gender: req.gender,
        }
    }
}

pub(crate) fn map_update_user_error(err: UpdateUserError) -> HttpResponse {
    match err {
        UpdateUserError::Forbidden => ApiResponse::forbidden(
            "FORBIDDEN",
            "You do not have permission to perform this action.",
        ),
        UpdateUserError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        UpdateUserError::Validation(fields) => ApiResponse::validation_error(fields),
        UpdateUserError::UserAlreadyExists => {
            warn!("Profile update lost a uniqueness race");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists")
        }
        UpdateUserError::RepositoryError(e) => {
            error!("Repository error updating user profile: {}", e);
            ApiResponse::internal_error()
        }
        UpdateUserError::QueryError(e) => {
            error!("Query error updating user profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

async fn update(
    user: AuthenticatedUser,
    target: Uuid,
    mode: UpdateMode,
    req: UpdateUserRequest,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data
        .update_user_profile_use_case
        .execute(user.user_id, UserId::from(target), mode, req.into())
        .await
    {
        Ok(profile) => ApiResponse::ok(&profile),
        Err(e) => map_update_user_error(e),
    }
}

/// Replace a profile
///
/// `username` and `email` are required; omitted optional fields are left as they are.
#[utoipa::path(
    put,
    path = "/users/{id}/",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated profile", body = UserProfile),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the account owner", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[put("/users/{id}/")]
pub async fn put_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    update(user, path.into_inner(), UpdateMode::Replace, req.into_inner(), data).await
}

/// Partially update a profile
#[utoipa::path(
    patch,
    path = "/users/{id}/",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated profile", body = UserProfile),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Not the account owner", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[patch("/users/{id}/")]
pub async fn patch_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    update(user, path.into_inner(), UpdateMode::Partial, req.into_inner(), data).await
}
