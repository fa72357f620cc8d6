use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::application::ports::outgoing::{
    CommentQueryError, CommentRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Only the author may delete the comment")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<CommentRepositoryError> for DeleteCommentError {
    fn from(err: CommentRepositoryError) -> Self {
        match err {
            CommentRepositoryError::NotFound => DeleteCommentError::NotFound,
            other => DeleteCommentError::RepositoryError(other.to_string()),
        }
    }
}

impl From<CommentQueryError> for DeleteCommentError {
    fn from(err: CommentQueryError) -> Self {
        DeleteCommentError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), DeleteCommentError>;
}
