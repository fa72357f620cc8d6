use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::ports::incoming::use_cases::GetPostsError;
use crate::modules::post::application::ports::outgoing::PostView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// All posts, newest first
#[utoipa::path(
    get,
    path = "/posts/",
    tag = "posts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Posts with counts and the caller's like flag", body = [PostView]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/posts/")]
pub async fn get_posts_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.post.get_list.execute(user.user_id).await {
        Ok(posts) => ApiResponse::ok(&posts),
        Err(GetPostsError::QueryError(e)) => {
            error!("Query error listing posts: {}", e);
            ApiResponse::internal_error()
        }
    }
}
