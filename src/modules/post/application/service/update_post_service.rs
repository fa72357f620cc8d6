use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::rules::check_post_fields;
use crate::modules::post::application::ports::incoming::use_cases::{
    PostInput, UpdatePostError, UpdatePostUseCase,
};
use crate::modules::post::application::ports::outgoing::{
    PostQuery, PostRepository, PostView, UpdatePostData,
};
use crate::shared::patch::UpdateMode;

pub struct UpdatePostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdatePostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdatePostUseCase for UpdatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        post_id: Uuid,
        mode: UpdateMode,
        input: PostInput,
    ) -> Result<PostView, UpdatePostError> {
        let author = self
            .query
            .find_post_author(post_id)
            .await?
            .ok_or(UpdatePostError::NotFound)?;

        if author != actor {
            warn!("User {} attempted to edit post {} of {}", actor, post_id, author);
            return Err(UpdatePostError::Forbidden);
        }

        let fields = check_post_fields(mode, input.title.as_deref(), input.content.as_deref())
            .map_err(UpdatePostError::Validation)?;

        self.repository
            .update_post(
                post_id,
                UpdatePostData {
                    title: fields.title,
                    content: fields.content,
                },
            )
            .await?;

        info!(post_id = %post_id, "Post updated");

        self.query
            .find_post(actor, post_id)
            .await?
            .ok_or(UpdatePostError::NotFound)
    }
}
