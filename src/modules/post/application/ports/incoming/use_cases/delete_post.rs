use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::outgoing::{PostQueryError, PostRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePostError {
    #[error("Post not found")]
    NotFound,

    #[error("Only the author may delete the post")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<PostRepositoryError> for DeletePostError {
    fn from(err: PostRepositoryError) -> Self {
        match err {
            PostRepositoryError::NotFound => DeletePostError::NotFound,
            other => DeletePostError::RepositoryError(other.to_string()),
        }
    }
}

impl From<PostQueryError> for DeletePostError {
    fn from(err: PostQueryError) -> Self {
        DeletePostError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait DeletePostUseCase: Send + Sync {
    async fn execute(&self, actor: UserId, post_id: Uuid) -> Result<(), DeletePostError>;
}
