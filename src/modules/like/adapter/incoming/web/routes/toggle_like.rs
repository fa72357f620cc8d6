use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::like::application::ports::incoming::use_cases::{
    ToggleLikeError, ToggleLikeOutput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Like the post, or remove the caller's like if it is already there
#[utoipa::path(
    post,
    path = "/posts/{id}/like/",
    tag = "likes",
    params(("id" = Uuid, Path, description = "Post id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "New like state and fresh count", body = ToggleLikeOutput),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
#[post("/posts/{id}/like/")]
pub async fn toggle_like_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.toggle_like_use_case.execute(user.user_id, post_id).await {
        Ok(output) => ApiResponse::ok(&output),
        Err(ToggleLikeError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        Err(ToggleLikeError::RepositoryError(e)) => {
            error!("Repository error toggling like on {}: {}", post_id, e);
            ApiResponse::internal_error()
        }
    }
}
