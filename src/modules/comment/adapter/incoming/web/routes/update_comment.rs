use actix_web::{patch, put, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::create_comment::CommentRequest;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::comment::application::ports::incoming::use_cases::UpdateCommentError;
use crate::modules::comment::application::ports::outgoing::CommentView;
use crate::shared::api::ApiResponse;
use crate::shared::patch::UpdateMode;
use crate::AppState;

pub(crate) fn map_update_comment_error(err: UpdateCommentError) -> HttpResponse {
    match err {
        UpdateCommentError::NotFound => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        UpdateCommentError::Forbidden => ApiResponse::forbidden(
            "FORBIDDEN",
            "You do not have permission to perform this action.",
        ),
        UpdateCommentError::Validation(fields) => ApiResponse::validation_error(fields),
        UpdateCommentError::RepositoryError(e) => {
            error!("Repository error updating comment: {}", e);
            ApiResponse::internal_error()
        }
        UpdateCommentError::QueryError(e) => {
            error!("Query error updating comment: {}", e);
            ApiResponse::internal_error()
        }
    }
}

async fn update(
    user: AuthenticatedUser,
    (post_id, comment_id): (Uuid, Uuid),
    mode: UpdateMode,
    req: CommentRequest,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data
        .comment
        .update
        .execute(user.user_id, post_id, comment_id, mode, req.into())
        .await
    {
        Ok(comment) => ApiResponse::ok(&comment),
        Err(e) => map_update_comment_error(e),
    }
}

#[utoipa::path(
    put,
    path = "/posts/{post_id}/comments/{id}/",
    tag = "comments",
    params(
        ("post_id" = Uuid, Path, description = "Post id"),
        ("id" = Uuid, Path, description = "Comment id"),
    ),
    request_body = CommentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated comment", body = CommentView),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
    )
)]
#[put("/posts/{post_id}/comments/{id}/")]
pub async fn put_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    req: web::Json<CommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    update(user, path.into_inner(), UpdateMode::Replace, req.into_inner(), data).await
}

#[utoipa::path(
    patch,
    path = "/posts/{post_id}/comments/{id}/",
    tag = "comments",
    params(
        ("post_id" = Uuid, Path, description = "Post id"),
        ("id" = Uuid, Path, description = "Comment id"),
    ),
    request_body = CommentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated comment", body = CommentView),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
    )
)]
#[patch("/posts/{post_id}/comments/{id}/")]
pub async fn patch_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    req: web::Json<CommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    update(user, path.into_inner(), UpdateMode::Partial, req.into_inner(), data).await
}
