use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::application::domain::rules::check_comment_text;
use crate::modules::comment::application::ports::incoming::use_cases::{
    CommentInput, CreateCommentError, CreateCommentUseCase,
};
use crate::modules::comment::application::ports::outgoing::{
    CommentQuery, CommentRepository, CommentView, CreateCommentData,
};
use crate::shared::patch::UpdateMode;

pub struct CreateCommentService<R, Q>
where
    R: CommentRepository,
    Q: CommentQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> CreateCommentService<R, Q>
where
    R: CommentRepository,
    Q: CommentQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreateCommentUseCase for CreateCommentService<R, Q>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
{
    async fn execute(
        &self,
        author: UserId,
        post_id: Uuid,
        input: CommentInput,
    ) -> Result<CommentView, CreateCommentError> {
        let text = check_comment_text(UpdateMode::Replace, input.text.as_deref())
            .map_err(CreateCommentError::Validation)?
            .unwrap_or_default();

        let record = self
            .repository
            .create_comment(CreateCommentData {
                post_id,
                author,
                text,
            })
            .await?;

        info!(comment_id = %record.id, post_id = %post_id, "Comment created");

        self.query
            .find_comment(post_id, record.id)
            .await?
            .ok_or(CreateCommentError::PostNotFound)
    }
}
