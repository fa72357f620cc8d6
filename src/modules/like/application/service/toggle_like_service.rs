use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::like::application::ports::incoming::use_cases::{
    LikeStatus, ToggleLikeError, ToggleLikeOutput, ToggleLikeUseCase,
};
use crate::modules::like::application::ports::outgoing::LikeRepository;

pub struct ToggleLikeService<R>
where
    R: LikeRepository,
{
    repository: R,
}

impl<R> ToggleLikeService<R>
where
    R: LikeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ToggleLikeUseCase for ToggleLikeService<R>
where
    R: LikeRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        post_id: Uuid,
    ) -> Result<ToggleLikeOutput, ToggleLikeError> {
        if !self.repository.post_exists(post_id).await? {
            return Err(ToggleLikeError::PostNotFound);
        }

        let status = if self.repository.insert_like(user, post_id).await? {
            LikeStatus::Liked
        } else {
            self.repository.delete_like(user, post_id).await?;
            LikeStatus::Unliked
        };

        let likes_count = self.repository.count_likes(post_id).await?;

        info!(
            user_id = %user,
            post_id = %post_id,
            ?status,
            likes_count,
            "Like toggled"
        );

        Ok(ToggleLikeOutput::new(status, likes_count))
    }
}
