use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserProfile};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CommentView {
    pub id: Uuid,
    /// Id of the parent post
    pub post: Uuid,
    pub post_title: String,
    pub author: UserProfile,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Every lookup is scoped to a post: a comment id under the wrong post is absent.
#[async_trait]
pub trait CommentQuery: Send + Sync {
    /// Comments of the post, oldest first. `None` when the post does not exist.
    async fn list_comments(
        &self,
        post_id: Uuid,
    ) -> Result<Option<Vec<CommentView>>, CommentQueryError>;

    async fn find_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<CommentView>, CommentQueryError>;

    async fn find_comment_author(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<UserId>, CommentQueryError>;
}
