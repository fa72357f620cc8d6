use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub author: UserId,
    pub title: String,
    pub content: String,
}

/// `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostData {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub id: Uuid,
    pub author: UserId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    NotFound,

    /// The author row vanished between authentication and insert.
    #[error("Author not found")]
    AuthorNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side, posts table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, data: CreatePostData) -> Result<PostRecord, PostRepositoryError>;

    /// Refreshes `updated_at` whenever at least one field changes.
    async fn update_post(
        &self,
        post_id: Uuid,
        data: UpdatePostData,
    ) -> Result<PostRecord, PostRepositoryError>;

    /// Hard delete; comments and likes go with it through the foreign keys.
    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;
}
