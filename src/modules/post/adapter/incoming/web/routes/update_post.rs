use actix_web::{patch, put, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::create_post::PostRequest;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::ports::incoming::use_cases::UpdatePostError;
use crate::modules::post::application::ports::outgoing::PostView;
use crate::shared::api::ApiResponse;
use crate::shared::patch::UpdateMode;
use crate::AppState;

pub(crate) fn map_update_post_error(err: UpdatePostError) -> HttpResponse {
    match err {
        UpdatePostError::NotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        UpdatePostError::Forbidden => ApiResponse::forbidden(
            "FORBIDDEN",
            "You do not have permission to perform this action.",
        ),
        UpdatePostError::Validation(fields) => ApiResponse::validation_error(fields),
        UpdatePostError::RepositoryError(e) => {
            error!("Repository error updating post: {}", e);
            ApiResponse::internal_error()
        }
        UpdatePostError::QueryError(e) => {
            error!("Query error updating post: {}", e);
            ApiResponse::internal_error()
        }
    }
}

async fn update(
    user: AuthenticatedUser,
    post_id: Uuid,
    mode: UpdateMode,
    req: PostRequest,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data
        .post
        .update
        .execute(user.user_id, post_id, mode, req.into())
        .await
    {
        Ok(post) => ApiResponse::ok(&post),
        Err(e) => map_update_post_error(e),
    }
}

/// Replace title and content
#[utoipa::path(
    put,
    path = "/posts/{id}/",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    request_body = PostRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated post", body = PostView),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
#[put("/posts/{id}/")]
pub async fn put_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<PostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    update(user, path.into_inner(), UpdateMode::Replace, req.into_inner(), data).await
}

/// Change title and/or content
#[utoipa::path(
    patch,
    path = "/posts/{id}/",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    request_body = PostRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated post", body = PostView),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
#[patch("/posts/{id}/")]
pub async fn patch_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<PostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    update(user, path.into_inner(), UpdateMode::Partial, req.into_inner(), data).await
}
