use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::comment::application::ports::incoming::use_cases::DeleteCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub(crate) fn map_delete_comment_error(err: DeleteCommentError) -> HttpResponse {
    match err {
        DeleteCommentError::NotFound => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        DeleteCommentError::Forbidden => ApiResponse::forbidden(
            "FORBIDDEN",
            "You do not have permission to perform this action.",
        ),
        DeleteCommentError::RepositoryError(e) => {
            error!("Repository error deleting comment: {}", e);
            ApiResponse::internal_error()
        }
        DeleteCommentError::QueryError(e) => {
            error!("Query error deleting comment: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/posts/{post_id}/comments/{id}/",
    tag = "comments",
    params(
        ("post_id" = Uuid, Path, description = "Post id"),
        ("id" = Uuid, Path, description = "Comment id"),
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
    )
)]
#[delete("/posts/{post_id}/comments/{id}/")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (post_id, comment_id) = path.into_inner();

    match data
        .comment
        .delete
        .execute(user.user_id, post_id, comment_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => map_delete_comment_error(e),
    }
}
