use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::{
            domain::entities::{UserId, UserProfile},
            use_cases::fetch_profile::FetchUserError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{get, routes, web, HttpResponse, Responder};
use tracing::{error, warn};
use uuid::Uuid;

pub(crate) fn map_fetch_user_error(err: FetchUserError) -> HttpResponse {
    match err {
        FetchUserError::UserNotFound(id) => {
            warn!("User {} not found", id);
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        FetchUserError::QueryError(e) => {
            error!("Database error fetching user profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// The caller's own profile
///
/// Also served at `/profile/`.
#[utoipa::path(
    get,
    path = "/users/me/",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile with posts_count", body = UserProfile),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[routes]
#[get("/profile/")]
#[get("/users/me/")]
pub async fn get_own_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_user_profile_use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::ok(&profile),
        Err(e) => map_fetch_user_error(e),
    }
}

/// All users ordered by username
#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User profiles", body = [UserProfile]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/users/")]
pub async fn list_users_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_users_use_case.execute().await {
        Ok(profiles) => ApiResponse::ok(&profiles),
        Err(e) => map_fetch_user_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}/",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User profile", body = UserProfile),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[get("/users/{id}/")]
pub async fn get_user_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.fetch_user_profile_use_case.execute(user_id).await {
        Ok(profile) => ApiResponse::ok(&profile),
        Err(e) => map_fetch_user_error(e),
    }
}
