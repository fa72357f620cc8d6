use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::application::ports::outgoing::{
    CommentQueryError, CommentRepositoryError, CommentView,
};
use crate::shared::validation::FieldErrors;

/// Post and author come from the path and the token, never from the body.
#[derive(Debug, Clone, Default)]
pub struct CommentInput {
    pub text: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCommentError {
    #[error("Invalid comment: {0}")]
    Validation(FieldErrors),

    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<CommentRepositoryError> for CreateCommentError {
    fn from(err: CommentRepositoryError) -> Self {
        match err {
            CommentRepositoryError::PostNotFound => CreateCommentError::PostNotFound,
            other => CreateCommentError::RepositoryError(other.to_string()),
        }
    }
}

impl From<CommentQueryError> for CreateCommentError {
    fn from(err: CommentQueryError) -> Self {
        CreateCommentError::QueryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        author: UserId,
        post_id: Uuid,
        input: CommentInput,
    ) -> Result<CommentView, CreateCommentError>;
}
