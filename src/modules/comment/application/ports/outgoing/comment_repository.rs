use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateCommentData {
    pub post_id: Uuid,
    pub author: UserId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentRecord {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Comment not found")]
    NotFound,

    /// The parent post is gone (foreign key rejected the insert).
    #[error("Post not found")]
    PostNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentRecord, CommentRepositoryError>;

    /// Replaces the text; `created_at` never changes.
    async fn update_comment(
        &self,
        comment_id: Uuid,
        text: String,
    ) -> Result<CommentRecord, CommentRepositoryError>;

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError>;
}
