use async_trait::async_trait;
use uuid::Uuid;

use super::CommentInput;
use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::application::ports::outgoing::{
    CommentQueryError, CommentRepositoryError, CommentView,
};
use crate::shared::patch::UpdateMode;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Only the author may modify the comment")]
    Forbidden,

    #[error("Invalid comment: {0}")]
    Validation(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<CommentRepositoryError> for UpdateCommentError {
    fn from(err: CommentRepositoryError) -> Self {
        match err {
            CommentRepositoryError::NotFound => UpdateCommentError::NotFound,
            other => UpdateCommentError::RepositoryError(other.to_string()),
        }
    }
}

impl From<CommentQueryError> for UpdateCommentError {
    fn from(err: CommentQueryError) -> Self {
        UpdateCommentError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait UpdateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        post_id: Uuid,
        comment_id: Uuid,
        mode: UpdateMode,
        input: CommentInput,
    ) -> Result<CommentView, UpdateCommentError>;
}
