use crate::auth::application::services::user_profile::{
    DeleteUserService, FetchUserProfileService, ListUsersService, UpdateUserProfileService,
};
use crate::auth::application::use_cases::check_availability::{
    CheckAvailabilityService, CheckAvailabilityUseCase,
};
use crate::auth::application::use_cases::create_user::{CreateUserUseCase, ICreateUserUseCase};
use crate::auth::application::use_cases::delete_user::DeleteUserUseCase;
use crate::auth::application::use_cases::fetch_profile::{
    FetchUserProfileUseCase, ListUsersUseCase,
};
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginUserUseCase};
use crate::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenUseCase,
};
use crate::auth::application::use_cases::update_profile::UpdateUserProfileUseCase;
use crate::modules::comment::application::comment_use_cases::CommentUseCases;
use crate::modules::comment::application::service::{
    CreateCommentService, DeleteCommentService, GetCommentsService, GetSingleCommentService,
    UpdateCommentService,
};
use crate::modules::like::application::ports::incoming::use_cases::ToggleLikeUseCase;
use crate::modules::like::application::service::ToggleLikeService;
use crate::modules::post::application::post_use_cases::PostUseCases;
use crate::modules::post::application::service::{
    CreatePostService, DeletePostService, GetPostsService, GetSinglePostService,
    UpdatePostService,
};
use crate::tests::support::fakes::{
    FakePasswordHasher, InMemoryComments, InMemoryLikes, InMemoryPosts, InMemoryUsers,
    StubTokenProvider,
};
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Real post services over one shared in-memory store.
pub fn post_use_cases(posts: &InMemoryPosts) -> PostUseCases {
    PostUseCases {
        create: Arc::new(CreatePostService::new(posts.clone(), posts.clone())),
        get_list: Arc::new(GetPostsService::new(posts.clone())),
        get_single: Arc::new(GetSinglePostService::new(posts.clone())),
        update: Arc::new(UpdatePostService::new(posts.clone(), posts.clone())),
        delete: Arc::new(DeletePostService::new(posts.clone(), posts.clone())),
    }
}

pub fn comment_use_cases(comments: &InMemoryComments) -> CommentUseCases {
    CommentUseCases {
        create: Arc::new(CreateCommentService::new(comments.clone(), comments.clone())),
        get_list: Arc::new(GetCommentsService::new(comments.clone())),
        get_single: Arc::new(GetSingleCommentService::new(comments.clone())),
        update: Arc::new(UpdateCommentService::new(comments.clone(), comments.clone())),
        delete: Arc::new(DeleteCommentService::new(comments.clone(), comments.clone())),
    }
}

/// Builds an `AppState` for handler tests. Every use case defaults to the
/// real service over empty in-memory stores; tests swap in what they exercise.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    check_availability: Arc<dyn CheckAvailabilityUseCase + Send + Sync>,
    fetch_user_profile: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    list_users: Arc<dyn ListUsersUseCase + Send + Sync>,
    update_user_profile: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    delete_user: Arc<dyn DeleteUserUseCase + Send + Sync>,
    post: PostUseCases,
    comment: CommentUseCases,
    toggle_like: Arc<dyn ToggleLikeUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let users = InMemoryUsers::default();

        Self {
            register_user: Arc::new(CreateUserUseCase::new(
                users.clone(),
                users.clone(),
                Arc::new(FakePasswordHasher),
                Arc::new(StubTokenProvider),
            )),
            login_user: Arc::new(LoginUserUseCase::new(
                users.clone(),
                Arc::new(FakePasswordHasher),
                Arc::new(StubTokenProvider),
            )),
            refresh_token: Arc::new(RefreshTokenUseCase::new(Arc::new(StubTokenProvider))),
            check_availability: Arc::new(CheckAvailabilityService::new(users.clone())),
            fetch_user_profile: Arc::new(FetchUserProfileService::new(users.clone())),
            list_users: Arc::new(ListUsersService::new(users.clone())),
            update_user_profile: Arc::new(UpdateUserProfileService::new(
                users.clone(),
                users.clone(),
            )),
            delete_user: Arc::new(DeleteUserService::new(users.clone(), users)),
            post: post_use_cases(&InMemoryPosts::default()),
            comment: comment_use_cases(&InMemoryComments::default()),
            toggle_like: Arc::new(ToggleLikeService::new(InMemoryLikes::default())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl ICreateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_check_availability(
        mut self,
        uc: impl CheckAvailabilityUseCase + Send + Sync + 'static,
    ) -> Self {
        self.check_availability = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_profile(
        mut self,
        uc: impl FetchUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_user_profile = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + Send + Sync + 'static) -> Self {
        self.list_users = Arc::new(uc);
        self
    }

    pub fn with_update_user_profile(
        mut self,
        uc: impl UpdateUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_user_profile = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + Send + Sync + 'static) -> Self {
        self.delete_user = Arc::new(uc);
        self
    }

    pub fn with_posts(mut self, use_cases: PostUseCases) -> Self {
        self.post = use_cases;
        self
    }

    pub fn with_comments(mut self, use_cases: CommentUseCases) -> Self {
        self.comment = use_cases;
        self
    }

    pub fn with_toggle_like(mut self, uc: impl ToggleLikeUseCase + Send + Sync + 'static) -> Self {
        self.toggle_like = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            refresh_token_use_case: self.refresh_token,
            check_availability_use_case: self.check_availability,
            fetch_user_profile_use_case: self.fetch_user_profile,
            list_users_use_case: self.list_users,
            update_user_profile_use_case: self.update_user_profile,
            delete_user_use_case: self.delete_user,
            post: self.post,
            comment: self.comment,
            toggle_like_use_case: self.toggle_like,
        })
    }
}
