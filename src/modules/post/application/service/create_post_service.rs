use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::domain::rules::check_post_fields;
use crate::modules::post::application::ports::incoming::use_cases::{
    CreatePostError, CreatePostUseCase, PostInput,
};
use crate::modules::post::application::ports::outgoing::{
    CreatePostData, PostQuery, PostRepository, PostView,
};
use crate::shared::patch::UpdateMode;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreatePostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> CreatePostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreatePostUseCase for CreatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, author: UserId, input: PostInput) -> Result<PostView, CreatePostError> {
        let fields = check_post_fields(
            UpdateMode::Replace,
            input.title.as_deref(),
            input.content.as_deref(),
        )
        .map_err(CreatePostError::Validation)?;

        let record = self
            .repository
            .create_post(CreatePostData {
                author,
                title: fields.title.unwrap_or_default(),
                content: fields.content.unwrap_or_default(),
            })
            .await?;

        info!(post_id = %record.id, author = %author, "Post created");

        self.query
            .find_post(author, record.id)
            .await?
            .ok_or_else(|| CreatePostError::QueryError("created post is not readable".to_string()))
    }
}
