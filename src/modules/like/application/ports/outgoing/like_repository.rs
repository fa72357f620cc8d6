use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LikeRepositoryError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Like rows keyed by (user, post). Counts are always read fresh.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn post_exists(&self, post_id: Uuid) -> Result<bool, LikeRepositoryError>;

    /// Inserts the pair unless it already exists. Returns whether a row was added;
    /// losing a concurrent insert race counts as "already there".
    async fn insert_like(&self, user: UserId, post_id: Uuid) -> Result<bool, LikeRepositoryError>;

    /// Returns whether a row was removed.
    async fn delete_like(&self, user: UserId, post_id: Uuid) -> Result<bool, LikeRepositoryError>;

    async fn count_likes(&self, post_id: Uuid) -> Result<u64, LikeRepositoryError>;
}
