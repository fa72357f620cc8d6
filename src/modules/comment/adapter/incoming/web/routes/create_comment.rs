use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::comment::application::ports::incoming::use_cases::{
    CommentInput, CreateCommentError,
};
use crate::modules::comment::application::ports::outgoing::CommentView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Body of comment create and edit requests. `post` and `author` are read-only.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CommentRequest {
    #[schema(example = "Nice post!")]
    pub text: Option<String>,
}

impl From<CommentRequest> for CommentInput {
    fn from(req: CommentRequest) -> Self {
        CommentInput { text: req.text }
    }
}

pub(crate) fn map_create_comment_error(err: CreateCommentError) -> HttpResponse {
    match err {
        CreateCommentError::Validation(fields) => ApiResponse::validation_error(fields),
        CreateCommentError::PostNotFound => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        CreateCommentError::RepositoryError(e) => {
            error!("Repository error creating comment: {}", e);
            ApiResponse::internal_error()
        }
        CreateCommentError::QueryError(e) => {
            error!("Query error reading created comment: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Comment on a post as the caller
#[utoipa::path(
    post,
    path = "/posts/{post_id}/comments/",
    tag = "comments",
    params(("post_id" = Uuid, Path, description = "Post id")),
    request_body = CommentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Comment created", body = CommentView),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
#[post("/posts/{post_id}/comments/")]
pub async fn create_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .comment
        .create
        .execute(user.user_id, path.into_inner(), req.into_inner().into())
        .await
    {
        Ok(created) => ApiResponse::created(&created),
        Err(e) => map_create_comment_error(e),
    }
}
