use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::comment::application::ports::incoming::use_cases::{
    GetSingleCommentError, GetSingleCommentUseCase,
};
use crate::modules::comment::application::ports::outgoing::{CommentQuery, CommentView};

pub struct GetSingleCommentService<Q>
where
    Q: CommentQuery,
{
    query: Q,
}

impl<Q> GetSingleCommentService<Q>
where
    Q: CommentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleCommentUseCase for GetSingleCommentService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<CommentView, GetSingleCommentError> {
        self.query
            .find_comment(post_id, comment_id)
            .await?
            .ok_or(GetSingleCommentError::NotFound)
    }
}
