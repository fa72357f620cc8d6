use async_trait::async_trait;
use uuid::Uuid;

use super::PostInput;
use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::outgoing::{
    PostQueryError, PostRepositoryError, PostView,
};
use crate::shared::patch::UpdateMode;
use crate::shared::validation::FieldErrors;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePostError {
    #[error("Post not found")]
    NotFound,

    #[error("Only the author may modify the post")]
    Forbidden,

    #[error("Invalid post: {0}")]
    Validation(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<PostRepositoryError> for UpdatePostError {
    fn from(err: PostRepositoryError) -> Self {
        match err {
            PostRepositoryError::NotFound => UpdatePostError::NotFound,
            other => UpdatePostError::RepositoryError(other.to_string()),
        }
    }
}

impl From<PostQueryError> for UpdatePostError {
    fn from(err: PostQueryError) -> Self {
        UpdatePostError::QueryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        post_id: Uuid,
        mode: UpdateMode,
        input: PostInput,
    ) -> Result<PostView, UpdatePostError>;
}
