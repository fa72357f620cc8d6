use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{
    Column as CommentColumn, Entity as CommentEntity, Model as CommentModel,
};
use crate::auth::adapter::outgoing::user_profiles::load_profiles;
use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::application::ports::outgoing::{
    CommentQuery, CommentQueryError, CommentView,
};
use crate::modules::post::adapter::outgoing::sea_orm_entity::{
    Column as PostColumn, Entity as PostEntity,
};

#[derive(Debug, Clone)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

async fn post_title<C>(db: &C, post_id: Uuid) -> Result<Option<String>, DbErr>
where
    C: ConnectionTrait,
{
    PostEntity::find_by_id(post_id)
        .select_only()
        .column(PostColumn::Title)
        .into_tuple()
        .one(db)
        .await
}

/// Comments of a single post with their author profiles.
async fn to_views<C>(
    db: &C,
    post_title: &str,
    comments: Vec<CommentModel>,
) -> Result<Vec<CommentView>, DbErr>
where
    C: ConnectionTrait,
{
    if comments.is_empty() {
        return Ok(Vec::new());
    }

    let mut author_ids: Vec<Uuid> = comments.iter().map(|c| c.author_id).collect();
    author_ids.sort();
    author_ids.dedup();

    let profiles = load_profiles(db, author_ids).await?;

    Ok(comments
        .into_iter()
        .filter_map(|comment| {
            let author = profiles.get(&comment.author_id)?.clone();
            Some(CommentView {
                id: comment.id,
                post: comment.post_id,
                post_title: post_title.to_string(),
                author,
                text: comment.text,
                created_at: comment.created_at.into(),
            })
        })
        .collect())
}

fn map_db_err(e: DbErr) -> CommentQueryError {
    CommentQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn list_comments(
        &self,
        post_id: Uuid,
    ) -> Result<Option<Vec<CommentView>>, CommentQueryError> {
        let Some(title) = post_title(&*self.db, post_id).await.map_err(map_db_err)? else {
            return Ok(None);
        };

        let comments = CommentEntity::find()
            .filter(CommentColumn::PostId.eq(post_id))
            .order_by_asc(CommentColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_views(&*self.db, &title, comments)
            .await
            .map(Some)
            .map_err(map_db_err)
    }

    async fn find_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<CommentView>, CommentQueryError> {
        let Some(comment) = CommentEntity::find_by_id(comment_id)
            .filter(CommentColumn::PostId.eq(post_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let Some(title) = post_title(&*self.db, post_id).await.map_err(map_db_err)? else {
            return Ok(None);
        };

        let views = to_views(&*self.db, &title, vec![comment])
            .await
            .map_err(map_db_err)?;

        Ok(views.into_iter().next())
    }

    async fn find_comment_author(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<UserId>, CommentQueryError> {
        let author: Option<Uuid> = CommentEntity::find_by_id(comment_id)
            .select_only()
            .column(CommentColumn::AuthorId)
            .filter(CommentColumn::PostId.eq(post_id))
            .into_tuple()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(author.map(UserId::from))
    }
}
