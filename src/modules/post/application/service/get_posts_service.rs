use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::incoming::use_cases::{
    GetPostsError, GetPostsUseCase,
};
use crate::modules::post::application::ports::outgoing::{PostQuery, PostView};

pub struct GetPostsService<Q>
where
    Q: PostQuery,
{
    query: Q,
}

impl<Q> GetPostsService<Q>
where
    Q: PostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPostsUseCase for GetPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, viewer: UserId) -> Result<Vec<PostView>, GetPostsError> {
        Ok(self.query.list_posts(viewer).await?)
    }
}
