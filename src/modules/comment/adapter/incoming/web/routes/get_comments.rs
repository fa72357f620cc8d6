use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::comment::application::ports::incoming::use_cases::GetCommentsError;
use crate::modules::comment::application::ports::outgoing::CommentView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Comments of a post, oldest first
#[utoipa::path(
    get,
    path = "/posts/{post_id}/comments/",
    tag = "comments",
    params(("post_id" = Uuid, Path, description = "Post id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Comments", body = [CommentView]),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
#[get("/posts/{post_id}/comments/")]
pub async fn get_comments_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.comment.get_list.execute(post_id).await {
        Ok(comments) => ApiResponse::ok(&comments),
        Err(GetCommentsError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        Err(GetCommentsError::QueryError(e)) => {
            error!("Query error listing comments of {}: {}", post_id, e);
            ApiResponse::internal_error()
        }
    }
}
