use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::application::domain::rules::check_comment_text;
use crate::modules::comment::application::ports::incoming::use_cases::{
    CommentInput, UpdateCommentError, UpdateCommentUseCase,
};
use crate::modules::comment::application::ports::outgoing::{
    CommentQuery, CommentRepository, CommentView,
};
use crate::shared::patch::UpdateMode;

pub struct UpdateCommentService<R, Q>
where
    R: CommentRepository,
    Q: CommentQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdateCommentService<R, Q>
where
    R: CommentRepository,
    Q: CommentQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdateCommentUseCase for UpdateCommentService<R, Q>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        post_id: Uuid,
        comment_id: Uuid,
        mode: UpdateMode,
        input: CommentInput,
    ) -> Result<CommentView, UpdateCommentError> {
        let author = self
            .query
            .find_comment_author(post_id, comment_id)
            .await?
            .ok_or(UpdateCommentError::NotFound)?;

        if author != actor {
            warn!(
                "User {} attempted to edit comment {} of {}",
                actor, comment_id, author
            );
            return Err(UpdateCommentError::Forbidden);
        }

        let text = check_comment_text(mode, input.text.as_deref())
            .map_err(UpdateCommentError::Validation)?;

        if let Some(text) = text {
            self.repository.update_comment(comment_id, text).await?;
            info!(comment_id = %comment_id, "Comment updated");
        }

        self.query
            .find_comment(post_id, comment_id)
            .await?
            .ok_or(UpdateCommentError::NotFound)
    }
}
