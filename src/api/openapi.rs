use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    AvailabilityResponse, LoginRequestDto, RefreshTokenRequestDto, UpdateUserRequest,
};
use crate::auth::application::domain::entities::{Gender, UserProfile};
use crate::auth::application::use_cases::create_user::{CreateUserInput, CreateUserOutput};
use crate::auth::application::use_cases::login_user::LoginUserResponse;
use crate::auth::application::use_cases::refresh_token::RefreshTokenResponse;

// Content
use crate::modules::comment::adapter::incoming::web::routes::CommentRequest;
use crate::modules::comment::application::ports::outgoing::CommentView;
use crate::modules::like::application::ports::incoming::use_cases::{
    LikeStatus, ToggleLikeOutput,
};
use crate::modules::post::adapter::incoming::web::routes::PostRequest;
use crate::modules::post::application::ports::outgoing::PostView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social Backend API",
        version = "1.0.0",
        description = "Users, posts, comments and likes"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::check_availability::check_username_handler,
        crate::auth::adapter::incoming::web::routes::check_availability::check_email_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::fetch_user::get_own_profile_handler,
        crate::auth::adapter::incoming::web::routes::fetch_user::list_users_handler,
        crate::auth::adapter::incoming::web::routes::fetch_user::get_user_handler,
        crate::auth::adapter::incoming::web::routes::update_profile::put_user_handler,
        crate::auth::adapter::incoming::web::routes::update_profile::patch_user_handler,
        crate::auth::adapter::incoming::web::routes::delete_user::delete_user_handler,

        // Post endpoints
        crate::modules::post::adapter::incoming::web::routes::get_posts::get_posts_handler,
        crate::modules::post::adapter::incoming::web::routes::create_post::create_post_handler,
        crate::modules::post::adapter::incoming::web::routes::get_single_post::get_single_post_handler,
        crate::modules::post::adapter::incoming::web::routes::update_post::put_post_handler,
        crate::modules::post::adapter::incoming::web::routes::update_post::patch_post_handler,
        crate::modules::post::adapter::incoming::web::routes::delete_post::delete_post_handler,

        // Like endpoint
        crate::modules::like::adapter::incoming::web::routes::toggle_like::toggle_like_handler,

        // Comment endpoints
        crate::modules::comment::adapter::incoming::web::routes::get_comments::get_comments_handler,
        crate::modules::comment::adapter::incoming::web::routes::create_comment::create_comment_handler,
        crate::modules::comment::adapter::incoming::web::routes::get_single_comment::get_single_comment_handler,
        crate::modules::comment::adapter::incoming::web::routes::update_comment::put_comment_handler,
        crate::modules::comment::adapter::incoming::web::routes::update_comment::patch_comment_handler,
        crate::modules::comment::adapter::incoming::web::routes::delete_comment::delete_comment_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            CreateUserInput,
            CreateUserOutput,
            LoginRequestDto,
            LoginUserResponse,
            RefreshTokenRequestDto,
            RefreshTokenResponse,
            AvailabilityResponse,
            UpdateUserRequest,
            UserProfile,
            Gender,

            // Content DTOs
            PostRequest,
            PostView,
            CommentRequest,
            CommentView,
            ToggleLikeOutput,
            LikeStatus
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, tokens and availability checks"),
        (name = "users", description = "User profiles"),
        (name = "posts", description = "Posts feed and authoring"),
        (name = "comments", description = "Comments on a post"),
        (name = "likes", description = "Toggle-like on a post"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/token/"))
                        .build(),
                ),
            )
        }
    }
}
