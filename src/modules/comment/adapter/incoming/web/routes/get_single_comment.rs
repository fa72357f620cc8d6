use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::comment::application::ports::incoming::use_cases::GetSingleCommentError;
use crate::modules::comment::application::ports::outgoing::CommentView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/posts/{post_id}/comments/{id}/",
    tag = "comments",
    params(
        ("post_id" = Uuid, Path, description = "Post id"),
        ("id" = Uuid, Path, description = "Comment id"),
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The comment", body = CommentView),
        (status = 404, description = "No such comment under this post", body = ErrorResponse),
    )
)]
#[get("/posts/{post_id}/comments/{id}/")]
pub async fn get_single_comment_handler(
    _user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (post_id, comment_id) = path.into_inner();

    match data.comment.get_single.execute(post_id, comment_id).await {
        Ok(comment) => ApiResponse::ok(&comment),
        Err(GetSingleCommentError::NotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        Err(GetSingleCommentError::QueryError(e)) => {
            error!("Query error fetching comment {}: {}", comment_id, e);
            ApiResponse::internal_error()
        }
    }
}
