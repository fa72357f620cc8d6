use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::comment::application::ports::outgoing::{CommentQueryError, CommentView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommentsError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<CommentQueryError> for GetCommentsError {
    fn from(err: CommentQueryError) -> Self {
        GetCommentsError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait GetCommentsUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<Vec<CommentView>, GetCommentsError>;
}
