use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::post::application::ports::incoming::use_cases::{CreatePostError, PostInput};
use crate::modules::post::application::ports::outgoing::PostView;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Post form for create, PUT and PATCH. Any `author` sent by the client is ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct PostRequest {
    #[schema(example = "Hello")]
    pub title: Option<String>,

    #[schema(example = "First post")]
    pub content: Option<String>,
}

impl From<PostRequest> for PostInput {
    fn from(req: PostRequest) -> Self {
        PostInput {
            title: req.title,
            content: req.content,
        }
    }
}

pub(crate) fn map_create_post_error(err: CreatePostError) -> HttpResponse {
    match err {
        CreatePostError::Validation(fields) => ApiResponse::validation_error(fields),
        CreatePostError::AuthorNotFound => {
            warn!("Post rejected: author account no longer exists");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        CreatePostError::RepositoryError(e) => {
            error!("Repository error creating post: {}", e);
            ApiResponse::internal_error()
        }
        CreatePostError::QueryError(e) => {
            error!("Query error reading created post: {}", e);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a post authored by the caller
#[utoipa::path(
    post,
    path = "/posts/",
    tag = "posts",
    request_body = PostRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Post created", body = PostView),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/posts/")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    req: web::Json<PostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .post
        .create
        .execute(user.user_id, req.into_inner().into())
        .await
    {
        Ok(created) => ApiResponse::created(&created),
        Err(e) => map_create_post_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::post::application::ports::outgoing::PostRepositoryError;
    use crate::tests::support::app_state_builder::{post_use_cases, TestAppStateBuilder};
    use crate::tests::support::fakes::{bearer, InMemoryPosts};
    use crate::tests::support::stub_token_provider;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    async fn call(posts: &InMemoryPosts, caller: Option<Uuid>, body: Value) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_posts(post_use_cases(posts))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(stub_token_provider())
                .service(create_post_handler),
        )
        .await;

        let mut req = test::TestRequest::post().uri("/posts/").set_json(&body);
        if let Some(id) = caller {
            req = req.insert_header(bearer(id));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_create_post_ignores_client_author() {
        let posts = InMemoryPosts::default();
        let alice = Uuid::new_v4();

        let (status, body) = call(
            &posts,
            Some(alice),
            json!({"title": "Hello", "content": "World", "author": Uuid::new_v4()}),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["author"]["id"], alice.to_string());
        assert_eq!(body["title"], "Hello");
        assert_eq!(body["likes_count"], 0);
        assert_eq!(body["comments_count"], 0);
        assert_eq!(body["is_liked"], false);
    }

    #[actix_web::test]
    async fn test_blank_title_is_validation_error() {
        let posts = InMemoryPosts::default();

        let (status, body) = call(
            &posts,
            Some(Uuid::new_v4()),
            json!({"title": " ", "content": "World"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["fields"]["title"].is_array());
        assert_eq!(posts.count(), 0);
    }

    #[actix_web::test]
    async fn test_requires_authentication() {
        let posts = InMemoryPosts::default();

        let (status, _) = call(&posts, None, json!({"title": "t", "content": "c"})).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(posts.count(), 0);
    }

    #[actix_web::test]
    async fn test_deleted_author_is_not_found() {
        let posts = InMemoryPosts::default().failing_writes(PostRepositoryError::AuthorNotFound);

        let (status, body) = call(
            &posts,
            Some(Uuid::new_v4()),
            json!({"title": "t", "content": "c"}),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
    }
}
