use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Gender, UserId, UserProfile};
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, TokenClaims, TokenError, TokenProvider,
    UpdateUserData, UserQuery, UserQueryError, UserQueryResult, UserRepository,
    UserRepositoryError,
};
use crate::auth::application::ports::outgoing::user_repository::UserResult;
use crate::modules::comment::application::ports::outgoing::{
    CommentQuery, CommentQueryError, CommentRecord, CommentRepository, CommentRepositoryError,
    CommentView, CreateCommentData,
};
use crate::modules::like::application::ports::outgoing::{LikeRepository, LikeRepositoryError};
use crate::modules::post::application::ports::outgoing::{
    CreatePostData, PostQuery, PostQueryError, PostRecord, PostRepository, PostRepositoryError,
    PostView, UpdatePostData,
};
use crate::shared::patch::PatchField;

// ───── Users ─────

#[derive(Default)]
struct UsersState {
    users: Vec<UserQueryResult>,
    posts_count: HashMap<Uuid, u64>,
    fail_queries: bool,
    create_error: Option<UserRepositoryError>,
    update_error: Option<UserRepositoryError>,
}

/// Shared in-memory user table implementing both the query and repository ports.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    state: Arc<Mutex<UsersState>>,
}

impl InMemoryUsers {
    pub fn add_user(&self, username: &str, email: &str, password: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.state.lock().unwrap().users.push(UserQueryResult {
            id,
            username: username.to_string(),
            email: email.to_lowercase(),
            password_hash: format!("hashed:{}", password),
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
            age: Some(30),
            city: Some("Oslo".to_string()),
            gender: Some(Gender::Female),
            date_joined: Utc::now(),
        });
        id
    }

    pub fn set_posts_count(&self, user_id: Uuid, count: u64) {
        self.state.lock().unwrap().posts_count.insert(user_id, count);
    }

    pub fn find_stored(&self, username: &str) -> Option<UserQueryResult> {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    pub fn failing_queries(self) -> Self {
        self.state.lock().unwrap().fail_queries = true;
        self
    }

    pub fn failing_create(self, error: UserRepositoryError) -> Self {
        self.state.lock().unwrap().create_error = Some(error);
        self
    }

    pub fn failing_update(self, error: UserRepositoryError) -> Self {
        self.state.lock().unwrap().update_error = Some(error);
        self
    }

    fn check_queries(&self) -> Result<(), UserQueryError> {
        if self.state.lock().unwrap().fail_queries {
            return Err(UserQueryError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }

    fn profile_of(state: &UsersState, user: &UserQueryResult) -> UserProfile {
        UserProfile {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            posts_count: state.posts_count.get(&user.id).copied().unwrap_or(0),
            age: user.age,
            city: user.city.clone(),
            gender: user.gender,
        }
    }
}

fn apply<T>(field: PatchField<T>, slot: &mut Option<T>) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *slot = None,
        PatchField::Value(v) => *slot = Some(v),
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.check_queries()?;
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.check_queries()?;
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.username == username).cloned())
    }

    async fn username_exists(
        &self,
        username: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, UserQueryError> {
        self.check_queries()?;
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().any(|u| {
            u.username.to_lowercase() == username.to_lowercase() && Some(u.id) != exclude
        }))
    }

    async fn email_exists(
        &self,
        email: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, UserQueryError> {
        self.check_queries()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .any(|u| u.email == email.to_lowercase() && Some(u.id) != exclude))
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, UserQueryError> {
        self.check_queries()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| Self::profile_of(&state, u)))
    }

    async fn list_profiles(&self) -> Result<Vec<UserProfile>, UserQueryError> {
        self.check_queries()?;
        let state = self.state.lock().unwrap();
        let mut profiles: Vec<UserProfile> = state
            .users
            .iter()
            .map(|u| Self::profile_of(&state, u))
            .collect();
        profiles.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(profiles)
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.create_error.clone() {
            return Err(error);
        }

        let id = Uuid::new_v4();
        state.users.push(UserQueryResult {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
            city: user.city,
            gender: user.gender,
            date_joined: Utc::now(),
        });

        Ok(UserResult {
            id,
            username: user.username,
            email: user.email,
        })
    }

    async fn update_user(
        &self,
        user_id: Uuid,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.update_error.clone() {
            return Err(error);
        }

        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        if let Some(username) = data.username {
            user.username = username;
        }
        if let Some(email) = data.email {
            user.email = email;
        }
        if let Some(first_name) = data.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = data.last_name {
            user.last_name = last_name;
        }
        apply(data.age, &mut user.age);
        apply(data.city, &mut user.city);
        apply(data.gender, &mut user.gender);

        Ok(UserResult {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        })
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.users.len();
        state.users.retain(|u| u.id != user_id);
        if state.users.len() == before {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

// ───── Posts ─────

#[derive(Default)]
struct PostsState {
    posts: Vec<PostRecord>,
    likes: HashMap<Uuid, HashSet<Uuid>>,
    comments_count: HashMap<Uuid, u64>,
    fail_queries: bool,
    write_error: Option<PostRepositoryError>,
}

/// In-memory posts table implementing both post ports. Authors are rendered
/// with a placeholder profile named after their id.
#[derive(Clone, Default)]
pub struct InMemoryPosts {
    state: Arc<Mutex<PostsState>>,
}

pub fn placeholder_profile(user_id: Uuid) -> UserProfile {
    UserProfile {
        id: user_id,
        username: format!("user-{}", &user_id.simple().to_string()[..8]),
        email: format!("{}@example.com", user_id.simple()),
        first_name: "First".to_string(),
        last_name: "Last".to_string(),
        posts_count: 0,
        age: None,
        city: None,
        gender: None,
    }
}

impl InMemoryPosts {
    /// Each added post is one second newer than the previous one.
    pub fn add_post(&self, author: Uuid, title: &str) -> Uuid {
        let mut state = self.state.lock().unwrap();
        let id = Uuid::new_v4();
        let created_at = Utc::now() + Duration::seconds(state.posts.len() as i64);
        state.posts.push(PostRecord {
            id,
            author: UserId::from(author),
            title: title.to_string(),
            content: format!("{} body", title),
            created_at,
            updated_at: created_at,
        });
        id
    }

    pub fn like(&self, user_id: Uuid, post_id: Uuid) {
        self.state
            .lock()
            .unwrap()
            .likes
            .entry(post_id)
            .or_default()
            .insert(user_id);
    }

    pub fn set_comments_count(&self, post_id: Uuid, count: u64) {
        self.state
            .lock()
            .unwrap()
            .comments_count
            .insert(post_id, count);
    }

    pub fn find_stored(&self, post_id: Uuid) -> Option<PostRecord> {
        self.state
            .lock()
            .unwrap()
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.state.lock().unwrap().posts.len()
    }

    pub fn failing_queries(self) -> Self {
        self.state.lock().unwrap().fail_queries = true;
        self
    }

    pub fn failing_writes(self, error: PostRepositoryError) -> Self {
        self.state.lock().unwrap().write_error = Some(error);
        self
    }

    fn check_queries(&self) -> Result<(), PostQueryError> {
        if self.state.lock().unwrap().fail_queries {
            return Err(PostQueryError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }

    fn view_of(state: &PostsState, viewer: UserId, post: &PostRecord) -> PostView {
        let likers = state.likes.get(&post.id);
        PostView {
            id: post.id,
            author: placeholder_profile(post.author.value()),
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
            likes_count: likers.map(|l| l.len() as u64).unwrap_or(0),
            comments_count: state.comments_count.get(&post.id).copied().unwrap_or(0),
            is_liked: likers.is_some_and(|l| l.contains(&viewer.value())),
        }
    }
}

#[async_trait]
impl PostQuery for InMemoryPosts {
    async fn list_posts(&self, viewer: UserId) -> Result<Vec<PostView>, PostQueryError> {
        self.check_queries()?;
        let state = self.state.lock().unwrap();
        let mut views: Vec<PostView> = state
            .posts
            .iter()
            .map(|p| Self::view_of(&state, viewer, p))
            .collect();
        views.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(views)
    }

    async fn find_post(
        &self,
        viewer: UserId,
        post_id: Uuid,
    ) -> Result<Option<PostView>, PostQueryError> {
        self.check_queries()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .map(|p| Self::view_of(&state, viewer, p)))
    }

    async fn find_post_author(&self, post_id: Uuid) -> Result<Option<UserId>, PostQueryError> {
        self.check_queries()?;
        let state = self.state.lock().unwrap();
        Ok(state.posts.iter().find(|p| p.id == post_id).map(|p| p.author))
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn create_post(&self, data: CreatePostData) -> Result<PostRecord, PostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.write_error.clone() {
            return Err(error);
        }

        let now = Utc::now() + Duration::seconds(state.posts.len() as i64);
        let record = PostRecord {
            id: Uuid::new_v4(),
            author: data.author,
            title: data.title,
            content: data.content,
            created_at: now,
            updated_at: now,
        };
        state.posts.push(record.clone());
        Ok(record)
    }

    async fn update_post(
        &self,
        post_id: Uuid,
        data: UpdatePostData,
    ) -> Result<PostRecord, PostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.write_error.clone() {
            return Err(error);
        }

        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(PostRepositoryError::NotFound)?;

        if data.title.is_some() || data.content.is_some() {
            post.updated_at = Utc::now() + Duration::hours(1);
        }
        if let Some(title) = data.title {
            post.title = title;
        }
        if let Some(content) = data.content {
            post.content = content;
        }
        Ok(post.clone())
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.write_error.clone() {
            return Err(error);
        }

        let before = state.posts.len();
        state.posts.retain(|p| p.id != post_id);
        if state.posts.len() == before {
            return Err(PostRepositoryError::NotFound);
        }
        state.likes.remove(&post_id);
        state.comments_count.remove(&post_id);
        Ok(())
    }
}

// ───── Comments ─────

#[derive(Default)]
struct CommentsState {
    post_titles: HashMap<Uuid, String>,
    comments: Vec<CommentRecord>,
    fail_queries: bool,
    write_error: Option<CommentRepositoryError>,
}

/// In-memory comments plus the titles of the posts they hang off.
#[derive(Clone, Default)]
pub struct InMemoryComments {
    state: Arc<Mutex<CommentsState>>,
}

impl InMemoryComments {
    pub fn add_post(&self, title: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.state
            .lock()
            .unwrap()
            .post_titles
            .insert(id, title.to_string());
        id
    }

    /// Drops the post and its comments, like the foreign key cascade.
    pub fn remove_post(&self, post_id: Uuid) {
        let mut state = self.state.lock().unwrap();
        state.post_titles.remove(&post_id);
        state.comments.retain(|c| c.post_id != post_id);
    }

    /// Each added comment is one second newer than the previous one.
    pub fn add_comment(&self, post_id: Uuid, author: Uuid, text: &str) -> Uuid {
        let mut state = self.state.lock().unwrap();
        let id = Uuid::new_v4();
        let created_at = Utc::now() + Duration::seconds(state.comments.len() as i64);
        state.comments.push(CommentRecord {
            id,
            post_id,
            author: UserId::from(author),
            text: text.to_string(),
            created_at,
        });
        id
    }

    pub fn find_stored(&self, comment_id: Uuid) -> Option<CommentRecord> {
        self.state
            .lock()
            .unwrap()
            .comments
            .iter()
            .find(|c| c.id == comment_id)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    pub fn failing_queries(self) -> Self {
        self.state.lock().unwrap().fail_queries = true;
        self
    }

    pub fn failing_writes(self, error: CommentRepositoryError) -> Self {
        self.state.lock().unwrap().write_error = Some(error);
        self
    }

    fn check_queries(&self) -> Result<(), CommentQueryError> {
        if self.state.lock().unwrap().fail_queries {
            return Err(CommentQueryError::DatabaseError(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }

    fn view_of(state: &CommentsState, comment: &CommentRecord) -> Option<CommentView> {
        let post_title = state.post_titles.get(&comment.post_id)?;
        Some(CommentView {
            id: comment.id,
            post: comment.post_id,
            post_title: post_title.clone(),
            author: placeholder_profile(comment.author.value()),
            text: comment.text.clone(),
            created_at: comment.created_at,
        })
    }
}

#[async_trait]
impl CommentQuery for InMemoryComments {
    async fn list_comments(
        &self,
        post_id: Uuid,
    ) -> Result<Option<Vec<CommentView>>, CommentQueryError> {
        self.check_queries()?;
        let state = self.state.lock().unwrap();
        if !state.post_titles.contains_key(&post_id) {
            return Ok(None);
        }

        let mut views: Vec<CommentView> = state
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .filter_map(|c| Self::view_of(&state, c))
            .collect();
        views.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(Some(views))
    }

    async fn find_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<CommentView>, CommentQueryError> {
        self.check_queries()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .find(|c| c.id == comment_id && c.post_id == post_id)
            .and_then(|c| Self::view_of(&state, c)))
    }

    async fn find_comment_author(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<UserId>, CommentQueryError> {
        self.check_queries()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .find(|c| c.id == comment_id && c.post_id == post_id)
            .map(|c| c.author))
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentRecord, CommentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.write_error.clone() {
            return Err(error);
        }
        if !state.post_titles.contains_key(&data.post_id) {
            return Err(CommentRepositoryError::PostNotFound);
        }

        let record = CommentRecord {
            id: Uuid::new_v4(),
            post_id: data.post_id,
            author: data.author,
            text: data.text,
            created_at: Utc::now() + Duration::seconds(state.comments.len() as i64),
        };
        state.comments.push(record.clone());
        Ok(record)
    }

    async fn update_comment(
        &self,
        comment_id: Uuid,
        text: String,
    ) -> Result<CommentRecord, CommentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.write_error.clone() {
            return Err(error);
        }

        let comment = state
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or(CommentRepositoryError::NotFound)?;
        comment.text = text;
        Ok(comment.clone())
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.write_error.clone() {
            return Err(error);
        }

        let before = state.comments.len();
        state.comments.retain(|c| c.id != comment_id);
        if state.comments.len() == before {
            return Err(CommentRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ───── Likes ─────

#[derive(Default)]
struct LikesState {
    posts: HashSet<Uuid>,
    likes: HashSet<(Uuid, Uuid)>,
    write_error: Option<LikeRepositoryError>,
}

/// Like pairs `(user, post)`; the set gives the composite-key uniqueness.
#[derive(Clone, Default)]
pub struct InMemoryLikes {
    state: Arc<Mutex<LikesState>>,
}

impl InMemoryLikes {
    pub fn add_post(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.state.lock().unwrap().posts.insert(id);
        id
    }

    pub fn like(&self, user_id: Uuid, post_id: Uuid) {
        self.state.lock().unwrap().likes.insert((user_id, post_id));
    }

    pub fn count(&self, post_id: Uuid) -> usize {
        self.state
            .lock()
            .unwrap()
            .likes
            .iter()
            .filter(|(_, p)| *p == post_id)
            .count()
    }

    pub fn failing_writes(self, error: LikeRepositoryError) -> Self {
        self.state.lock().unwrap().write_error = Some(error);
        self
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikes {
    async fn post_exists(&self, post_id: Uuid) -> Result<bool, LikeRepositoryError> {
        Ok(self.state.lock().unwrap().posts.contains(&post_id))
    }

    async fn insert_like(&self, user: UserId, post_id: Uuid) -> Result<bool, LikeRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.write_error.clone() {
            return Err(error);
        }
        if !state.posts.contains(&post_id) {
            return Err(LikeRepositoryError::PostNotFound);
        }
        Ok(state.likes.insert((user.value(), post_id)))
    }

    async fn delete_like(&self, user: UserId, post_id: Uuid) -> Result<bool, LikeRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.write_error.clone() {
            return Err(error);
        }
        Ok(state.likes.remove(&(user.value(), post_id)))
    }

    async fn count_likes(&self, post_id: Uuid) -> Result<u64, LikeRepositoryError> {
        Ok(self.count(post_id) as u64)
    }
}

// ───── Password hashing ─────

/// `hashed:<password>`; cheap and deterministic.
pub struct FakePasswordHasher;

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

// ───── Tokens ─────

/// Tokens look like `access-<uuid>` / `refresh-<uuid>`; `expired-<uuid>` fails as expired.
#[derive(Default, Clone)]
pub struct StubTokenProvider;

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("access-{}", user_id))
    }

    fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("refresh-{}", user_id))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (token_type, raw_id) = token.split_once('-').ok_or(TokenError::MalformedToken)?;
        let sub = Uuid::parse_str(raw_id).map_err(|_| TokenError::MalformedToken)?;

        match token_type {
            "access" | "refresh" => Ok(TokenClaims {
                sub,
                exp: 9_999_999_999,
                iat: 0,
                nbf: 0,
                iss: "test".to_string(),
                token_type: token_type.to_string(),
            }),
            "expired" => Err(TokenError::TokenExpired),
            _ => Err(TokenError::MalformedToken),
        }
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_token(refresh_token)?;
        if claims.token_type != "refresh" {
            return Err(TokenError::InvalidTokenType("refresh".to_string()));
        }
        self.generate_access_token(claims.sub)
    }
}

pub fn bearer(user_id: Uuid) -> (&'static str, String) {
    ("Authorization", format!("Bearer access-{}", user_id))
}
