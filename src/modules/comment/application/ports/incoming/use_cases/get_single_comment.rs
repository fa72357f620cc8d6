use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::comment::application::ports::outgoing::{CommentQueryError, CommentView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<CommentQueryError> for GetSingleCommentError {
    fn from(err: CommentQueryError) -> Self {
        GetSingleCommentError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait GetSingleCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<CommentView, GetSingleCommentError>;
}
