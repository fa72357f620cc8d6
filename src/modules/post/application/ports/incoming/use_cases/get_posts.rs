use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::outgoing::{PostQueryError, PostView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<PostQueryError> for GetPostsError {
    fn from(err: PostQueryError) -> Self {
        GetPostsError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait GetPostsUseCase: Send + Sync {
    async fn execute(&self, viewer: UserId) -> Result<Vec<PostView>, GetPostsError>;
}
