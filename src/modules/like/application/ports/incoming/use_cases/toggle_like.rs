use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::like::application::ports::outgoing::LikeRepositoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LikeStatus {
    Liked,
    Unliked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ToggleLikeOutput {
    pub status: LikeStatus,
    /// Likes on the post after the toggle
    pub likes_count: u64,
    pub is_liked: bool,
}

impl ToggleLikeOutput {
    pub fn new(status: LikeStatus, likes_count: u64) -> Self {
        Self {
            status,
            likes_count,
            is_liked: status == LikeStatus::Liked,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleLikeError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<LikeRepositoryError> for ToggleLikeError {
    fn from(err: LikeRepositoryError) -> Self {
        match err {
            LikeRepositoryError::PostNotFound => ToggleLikeError::PostNotFound,
            other => ToggleLikeError::RepositoryError(other.to_string()),
        }
    }
}

/// Likes the post if the user does not like it yet, otherwise removes the like.
#[async_trait]
pub trait ToggleLikeUseCase: Send + Sync {
    async fn execute(&self, user: UserId, post_id: Uuid)
        -> Result<ToggleLikeOutput, ToggleLikeError>;
}
