use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::ports::incoming::use_cases::GetSinglePostError;
use crate::modules::post::application::ports::outgoing::PostView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/posts/{id}/",
    tag = "posts",
    params(("id" = Uuid, Path, description = "Post id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The post", body = PostView),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
#[get("/posts/{id}/")]
pub async fn get_single_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.get_single.execute(user.user_id, post_id).await {
        Ok(post) => ApiResponse::ok(&post),
        Err(GetSinglePostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }
        Err(GetSinglePostError::QueryError(e)) => {
            error!("Query error fetching post {}: {}", post_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::custom_path_config;
    use crate::tests::support::app_state_builder::{post_use_cases, TestAppStateBuilder};
    use crate::tests::support::fakes::{bearer, InMemoryPosts};
    use crate::tests::support::stub_token_provider;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    async fn call(posts: &InMemoryPosts, uri: &str) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_posts(post_use_cases(posts))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(stub_token_provider())
                .app_data(custom_path_config())
                .service(get_single_post_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer(Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_get_existing_post() {
        let posts = InMemoryPosts::default();
        let id = posts.add_post(Uuid::new_v4(), "Hello");
        posts.set_comments_count(id, 2);

        let (status, body) = call(&posts, &format!("/posts/{}/", id)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Hello");
        assert_eq!(body["comments_count"], 2);
        assert!(body["author"]["username"].is_string());
    }

    #[actix_web::test]
    async fn test_missing_post_is_404() {
        let (status, body) = call(
            &InMemoryPosts::default(),
            &format!("/posts/{}/", Uuid::new_v4()),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "POST_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_malformed_id_is_404() {
        let (status, _) = call(&InMemoryPosts::default(), "/posts/not-a-uuid/").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
