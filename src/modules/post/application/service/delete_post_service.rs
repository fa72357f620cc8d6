use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::incoming::use_cases::{
    DeletePostError, DeletePostUseCase,
};
use crate::modules::post::application::ports::outgoing::{PostQuery, PostRepository};

pub struct DeletePostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeletePostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeletePostUseCase for DeletePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, actor: UserId, post_id: Uuid) -> Result<(), DeletePostError> {
        let author = self
            .query
            .find_post_author(post_id)
            .await?
            .ok_or(DeletePostError::NotFound)?;

        if author != actor {
            warn!("User {} attempted to delete post {} of {}", actor, post_id, author);
            return Err(DeletePostError::Forbidden);
        }

        self.repository.delete_post(post_id).await?;

        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }
}
