use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserProfile};

/// A post as the API returns it, with counts computed at read time.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PostView {
    pub id: Uuid,
    pub author: UserProfile,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub likes_count: u64,
    pub comments_count: u64,
    /// Whether the requesting user currently likes the post
    pub is_liked: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostQuery: Send + Sync {
    /// Every post, newest first.
    async fn list_posts(&self, viewer: UserId) -> Result<Vec<PostView>, PostQueryError>;

    async fn find_post(
        &self,
        viewer: UserId,
        post_id: Uuid,
    ) -> Result<Option<PostView>, PostQueryError>;

    /// Author of the post, `None` when it does not exist.
    async fn find_post_author(&self, post_id: Uuid) -> Result<Option<UserId>, PostQueryError>;
}
