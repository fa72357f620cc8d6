use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::outgoing::{
    PostQueryError, PostRepositoryError, PostView,
};
use crate::shared::validation::FieldErrors;

/// Raw post form; the author always comes from the token.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Invalid post: {0}")]
    Validation(FieldErrors),

    #[error("Author not found")]
    AuthorNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<PostRepositoryError> for CreatePostError {
    fn from(err: PostRepositoryError) -> Self {
        match err {
            PostRepositoryError::AuthorNotFound => CreatePostError::AuthorNotFound,
            other => CreatePostError::RepositoryError(other.to_string()),
        }
    }
}

impl From<PostQueryError> for CreatePostError {
    fn from(err: PostQueryError) -> Self {
        CreatePostError::QueryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, author: UserId, input: PostInput) -> Result<PostView, CreatePostError>;
}
