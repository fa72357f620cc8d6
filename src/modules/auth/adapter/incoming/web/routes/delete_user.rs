use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::delete_user::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

pub(crate) fn map_delete_user_error(err: DeleteUserError) -> HttpResponse {
    match err {
        DeleteUserError::Forbidden => ApiResponse::forbidden(
            "FORBIDDEN",
            "You do not have permission to perform this action.",
        ),
        DeleteUserError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        DeleteUserError::RepositoryError(e) => {
            error!("Repository error deleting user: {}", e);
            ApiResponse::internal_error()
        }
        DeleteUserError::QueryError(e) => {
            error!("Query error deleting user: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Delete an account
///
/// Removes the user together with their posts, comments and likes.
#[utoipa::path(
    delete,
    path = "/users/{id}/",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the account owner", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[delete("/users/{id}/")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = UserId::from(path.into_inner());

    match data.delete_user_use_case.execute(user.user_id, target).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => map_delete_user_error(e),
    }
}
