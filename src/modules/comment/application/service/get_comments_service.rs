use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::comment::application::ports::incoming::use_cases::{
    GetCommentsError, GetCommentsUseCase,
};
use crate::modules::comment::application::ports::outgoing::{CommentQuery, CommentView};

pub struct GetCommentsService<Q>
where
    Q: CommentQuery,
{
    query: Q,
}

impl<Q> GetCommentsService<Q>
where
    Q: CommentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCommentsUseCase for GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<Vec<CommentView>, GetCommentsError> {
        self.query
            .list_comments(post_id)
            .await?
            .ok_or(GetCommentsError::PostNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fakes::InMemoryComments;

    #[tokio::test]
    async fn test_oldest_first_and_scoped_to_post() {
        let comments = InMemoryComments::default();
        let post = comments.add_post("Hello");
        let other = comments.add_post("Other");
        let first = comments.add_comment(post, Uuid::new_v4(), "first");
        comments.add_comment(other, Uuid::new_v4(), "elsewhere");
        let second = comments.add_comment(post, Uuid::new_v4(), "second");

        let views = GetCommentsService::new(comments).execute(post).await.unwrap();

        let ids: Vec<Uuid> = views.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first, second]);
        assert!(views.iter().all(|c| c.post_title == "Hello"));
    }

    #[tokio::test]
    async fn test_post_without_comments() {
        let comments = InMemoryComments::default();
        let post = comments.add_post("Quiet");

        let views = GetCommentsService::new(comments).execute(post).await.unwrap();
        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn test_missing_post() {
        let result = GetCommentsService::new(InMemoryComments::default())
            .execute(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(GetCommentsError::PostNotFound)));
    }
}
