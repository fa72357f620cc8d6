use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::ports::incoming::use_cases::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub(crate) fn map_delete_post_error(err: DeletePostError) -> HttpResponse {
    match err {
        DeletePostError::NotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        DeletePostError::Forbidden => ApiResponse::forbidden(
            "FORBIDDEN",
            "You do not have permission to perform this action.",
        ),
        DeletePostError::RepositoryError(e) => {
            error!("Repository error deleting post: {}", e);
            ApiResponse::internal_error()
        }
        DeletePostError::QueryError(e) => {
            error!("Query error deleting post: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Delete a post with its comments and likes
#[utoipa::path(
    delete,
    path = "/posts/{id}/",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
#[delete("/posts/{id}/")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.post.delete.execute(user.user_id, path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => map_delete_post_error(e),
    }
}
