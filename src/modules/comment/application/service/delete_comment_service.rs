use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::application::ports::incoming::use_cases::{
    DeleteCommentError, DeleteCommentUseCase,
};
use crate::modules::comment::application::ports::outgoing::{CommentQuery, CommentRepository};

pub struct DeleteCommentService<R, Q>
where
    R: CommentRepository,
    Q: CommentQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeleteCommentService<R, Q>
where
    R: CommentRepository,
    Q: CommentQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeleteCommentUseCase for DeleteCommentService<R, Q>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), DeleteCommentError> {
        let author = self
            .query
            .find_comment_author(post_id, comment_id)
            .await?
            .ok_or(DeleteCommentError::NotFound)?;

        if author != actor {
            warn!(
                "User {} attempted to delete comment {} of {}",
                actor, comment_id, author
            );
            return Err(DeleteCommentError::Forbidden);
        }

        self.repository.delete_comment(comment_id).await?;

        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }
}
