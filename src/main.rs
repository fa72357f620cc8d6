pub mod api;
pub mod health;
pub mod modules;
pub mod seed;
pub mod shared;

pub use modules::auth;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::user_profile::{
    DeleteUserService, FetchUserProfileService, ListUsersService, UpdateUserProfileService,
};
use crate::auth::application::use_cases::{
    check_availability::{CheckAvailabilityService, CheckAvailabilityUseCase},
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    delete_user::DeleteUserUseCase,
    fetch_profile::{FetchUserProfileUseCase, ListUsersUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    update_profile::UpdateUserProfileUseCase,
};
use crate::modules::comment::adapter::outgoing::{CommentQueryPostgres, CommentRepositoryPostgres};
use crate::modules::comment::application::comment_use_cases::CommentUseCases;
use crate::modules::comment::application::service::{
    CreateCommentService, DeleteCommentService, GetCommentsService, GetSingleCommentService,
    UpdateCommentService,
};
use crate::modules::like::adapter::outgoing::LikeRepositoryPostgres;
use crate::modules::like::application::ports::incoming::use_cases::ToggleLikeUseCase;
use crate::modules::like::application::service::ToggleLikeService;
use crate::modules::post::adapter::outgoing::{PostQueryPostgres, PostRepositoryPostgres};
use crate::modules::post::application::post_use_cases::PostUseCases;
use crate::modules::post::application::service::{
    CreatePostService, DeletePostService, GetPostsService, GetSinglePostService,
    UpdatePostService,
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::config::{parse_flag, AppConfig, PasswordHasherKind};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub check_availability_use_case: Arc<dyn CheckAvailabilityUseCase + Send + Sync>,
    pub fetch_user_profile_use_case: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub list_users_use_case: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub update_user_profile_use_case: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    pub delete_user_use_case: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub post: PostUseCases,
    pub comment: CommentUseCases,
    pub toggle_like_use_case: Arc<dyn ToggleLikeUseCase + Send + Sync>,
}

/// Wires every use case over the sea-orm adapters sharing `db`.
pub fn build_app_state(
    db: Arc<DatabaseConnection>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    rotate_refresh: bool,
) -> AppState {
    let user_query = UserQueryPostgres::new(Arc::clone(&db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db));

    let post_query = PostQueryPostgres::new(Arc::clone(&db));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(&db));

    let comment_query = CommentQueryPostgres::new(Arc::clone(&db));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db));

    let like_repo = LikeRepositoryPostgres::new(db);

    let post = PostUseCases {
        create: Arc::new(CreatePostService::new(post_repo.clone(), post_query.clone())),
        get_list: Arc::new(GetPostsService::new(post_query.clone())),
        get_single: Arc::new(GetSinglePostService::new(post_query.clone())),
        update: Arc::new(UpdatePostService::new(post_repo.clone(), post_query.clone())),
        delete: Arc::new(DeletePostService::new(post_repo, post_query)),
    };

    let comment = CommentUseCases {
        create: Arc::new(CreateCommentService::new(
            comment_repo.clone(),
            comment_query.clone(),
        )),
        get_list: Arc::new(GetCommentsService::new(comment_query.clone())),
        get_single: Arc::new(GetSingleCommentService::new(comment_query.clone())),
        update: Arc::new(UpdateCommentService::new(
            comment_repo.clone(),
            comment_query.clone(),
        )),
        delete: Arc::new(DeleteCommentService::new(comment_repo, comment_query)),
    };

    AppState {
        register_user_use_case: Arc::new(CreateUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            password_hasher.clone(),
            token_provider.clone(),
        )),
        login_user_use_case: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            password_hasher,
            token_provider.clone(),
        )),
        refresh_token_use_case: Arc::new(
            RefreshTokenUseCase::new(token_provider).with_token_rotation(rotate_refresh),
        ),
        check_availability_use_case: Arc::new(CheckAvailabilityService::new(user_query.clone())),
        fetch_user_profile_use_case: Arc::new(FetchUserProfileService::new(user_query.clone())),
        list_users_use_case: Arc::new(ListUsersService::new(user_query.clone())),
        update_user_profile_use_case: Arc::new(UpdateUserProfileService::new(
            user_query.clone(),
            user_repo.clone(),
        )),
        delete_user_use_case: Arc::new(DeleteUserService::new(user_query, user_repo)),
        post,
        comment,
        toggle_like_use_case: Arc::new(ToggleLikeService::new(like_repo)),
    }
}

fn password_hasher_from(
    kind: PasswordHasherKind,
) -> anyhow::Result<Arc<dyn PasswordHasher + Send + Sync>> {
    Ok(match kind {
        PasswordHasherKind::Argon2 => Arc::new(Argon2Hasher::from_env()?),
        PasswordHasherKind::Bcrypt => Arc::new(BcryptHasher::new()),
    })
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;
    let rotate_refresh = parse_flag(&|key: &str| env::var(key).ok(), "JWT_ROTATE_REFRESH", false)?;
    let password_hasher = password_hasher_from(config.password_hasher)?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let db_arc = Arc::new(conn);

    if config.run_migrations {
        Migrator::up(&*db_arc, None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }

    if config.create_test_data {
        crate::seed::seed_demo_data(Arc::clone(&db_arc), password_hasher.as_ref())
            .await
            .context("Failed to create demo data")?;
    } else {
        info!("CREATE_TEST_DATA not set, skipping demo data");
    }

    let jwt_service = JwtTokenService::new(jwt_config);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let state = build_app_state(
        Arc::clone(&db_arc),
        Arc::clone(&token_provider_arc),
        password_hasher,
        rotate_refresh,
    );

    let server_url = format!("{}:{}", config.host, config.port);
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::modules::comment::adapter::incoming::web::routes as comment_routes;
    use crate::modules::like::adapter::incoming::web::routes as like_routes;
    use crate::modules::post::adapter::incoming::web::routes as post_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::refresh_token_handler);
    cfg.service(auth_routes::check_username_handler);
    cfg.service(auth_routes::check_email_handler);
    // Users; `/users/me/` must win over `/users/{id}/`
    cfg.service(auth_routes::get_own_profile_handler);
    cfg.service(auth_routes::list_users_handler);
    cfg.service(auth_routes::get_user_handler);
    cfg.service(auth_routes::put_user_handler);
    cfg.service(auth_routes::patch_user_handler);
    cfg.service(auth_routes::delete_user_handler);
    // Posts
    cfg.service(post_routes::get_posts_handler);
    cfg.service(post_routes::create_post_handler);
    cfg.service(post_routes::get_single_post_handler);
    cfg.service(post_routes::put_post_handler);
    cfg.service(post_routes::patch_post_handler);
    cfg.service(post_routes::delete_post_handler);
    // Likes
    cfg.service(like_routes::toggle_like_handler);
    // Comments
    cfg.service(comment_routes::get_comments_handler);
    cfg.service(comment_routes::create_comment_handler);
    cfg.service(comment_routes::get_single_comment_handler);
    cfg.service(comment_routes::put_comment_handler);
    cfg.service(comment_routes::patch_comment_handler);
    cfg.service(comment_routes::delete_comment_handler);
    // API docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!("Error starting app: {:#}", e);
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
