use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::incoming::use_cases::{
    GetSinglePostError, GetSinglePostUseCase,
};
use crate::modules::post::application::ports::outgoing::{PostQuery, PostView};

pub struct GetSinglePostService<Q>
where
    Q: PostQuery,
{
    query: Q,
}

impl<Q> GetSinglePostService<Q>
where
    Q: PostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSinglePostUseCase for GetSinglePostService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, viewer: UserId, post_id: Uuid) -> Result<PostView, GetSinglePostError> {
        self.query
            .find_post(viewer, post_id)
            .await?
            .ok_or(GetSinglePostError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fakes::InMemoryPosts;

    #[tokio::test]
    async fn test_found() {
        let posts = InMemoryPosts::default();
        let id = posts.add_post(Uuid::new_v4(), "Hello");
        posts.set_comments_count(id, 3);

        let view = GetSinglePostService::new(posts)
            .execute(UserId::from(Uuid::new_v4()), id)
            .await
            .unwrap();

        assert_eq!(view.title, "Hello");
        assert_eq!(view.comments_count, 3);
    }

    #[tokio::test]
    async fn test_missing_post() {
        let result = GetSinglePostService::new(InMemoryPosts::default())
            .execute(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(GetSinglePostError::NotFound)));
    }
}
