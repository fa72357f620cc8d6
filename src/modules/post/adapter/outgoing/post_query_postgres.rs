use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{Column as PostColumn, Entity as PostEntity, Model as PostModel};
use crate::auth::adapter::outgoing::user_profiles::load_profiles;
use crate::auth::application::domain::entities::UserId;
use crate::modules::comment::adapter::outgoing::sea_orm_entity::{
    Column as CommentColumn, Entity as CommentEntity,
};
use crate::modules::like::adapter::outgoing::sea_orm_entity::{
    Column as LikeColumn, Entity as LikeEntity,
};
use crate::modules::post::application::ports::outgoing::{PostQuery, PostQueryError, PostView};
use crate::shared::persistence::{count_map, GroupCount};

#[derive(Debug, Clone)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

//
// ──────────────────────────────────────────────────────────
// Projections
// ──────────────────────────────────────────────────────────
//

async fn likes_count_by_post<C>(db: &C, post_ids: Vec<Uuid>) -> Result<HashMap<Uuid, u64>, DbErr>
where
    C: ConnectionTrait,
{
    let rows = LikeEntity::find()
        .select_only()
        .column_as(LikeColumn::PostId, "id")
        .column_as(Expr::col((LikeEntity, LikeColumn::UserId)).count(), "total")
        .filter(LikeColumn::PostId.is_in(post_ids))
        .group_by(LikeColumn::PostId)
        .into_model::<GroupCount>()
        .all(db)
        .await?;

    Ok(count_map(rows))
}

async fn comments_count_by_post<C>(
    db: &C,
    post_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, u64>, DbErr>
where
    C: ConnectionTrait,
{
    let rows = CommentEntity::find()
        .select_only()
        .column_as(CommentColumn::PostId, "id")
        .column_as(Expr::col((CommentEntity, CommentColumn::Id)).count(), "total")
        .filter(CommentColumn::PostId.is_in(post_ids))
        .group_by(CommentColumn::PostId)
        .into_model::<GroupCount>()
        .all(db)
        .await?;

    Ok(count_map(rows))
}

/// Which of `post_ids` the viewer currently likes.
async fn liked_by<C>(db: &C, viewer: UserId, post_ids: Vec<Uuid>) -> Result<HashSet<Uuid>, DbErr>
where
    C: ConnectionTrait,
{
    let liked: Vec<Uuid> = LikeEntity::find()
        .select_only()
        .column(LikeColumn::PostId)
        .filter(LikeColumn::UserId.eq(viewer.value()))
        .filter(LikeColumn::PostId.is_in(post_ids))
        .into_tuple()
        .all(db)
        .await?;

    Ok(liked.into_iter().collect())
}

/// Decorates post rows with author profiles and counts. Order is preserved;
/// a post whose author vanished mid-request is skipped.
async fn to_views<C>(db: &C, viewer: UserId, posts: Vec<PostModel>) -> Result<Vec<PostView>, DbErr>
where
    C: ConnectionTrait,
{
    if posts.is_empty() {
        return Ok(Vec::new());
    }

    let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
    let mut author_ids: Vec<Uuid> = posts.iter().map(|p| p.author_id).collect();
    author_ids.sort();
    author_ids.dedup();

    let profiles = load_profiles(db, author_ids).await?;
    let likes = likes_count_by_post(db, post_ids.clone()).await?;
    let comments = comments_count_by_post(db, post_ids.clone()).await?;
    let liked = liked_by(db, viewer, post_ids).await?;

    Ok(posts
        .into_iter()
        .filter_map(|post| {
            let author = profiles.get(&post.author_id)?.clone();
            Some(PostView {
                id: post.id,
                author,
                title: post.title,
                content: post.content,
                created_at: post.created_at.into(),
                updated_at: post.updated_at.into(),
                likes_count: likes.get(&post.id).copied().unwrap_or(0),
                comments_count: comments.get(&post.id).copied().unwrap_or(0),
                is_liked: liked.contains(&post.id),
            })
        })
        .collect())
}

fn map_db_err(e: DbErr) -> PostQueryError {
    PostQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn list_posts(&self, viewer: UserId) -> Result<Vec<PostView>, PostQueryError> {
        let posts = PostEntity::find()
            .order_by_desc(PostColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_views(&*self.db, viewer, posts).await.map_err(map_db_err)
    }

    async fn find_post(
        &self,
        viewer: UserId,
        post_id: Uuid,
    ) -> Result<Option<PostView>, PostQueryError> {
        let Some(post) = PostEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let views = to_views(&*self.db, viewer, vec![post])
            .await
            .map_err(map_db_err)?;

        Ok(views.into_iter().next())
    }

    async fn find_post_author(&self, post_id: Uuid) -> Result<Option<UserId>, PostQueryError> {
        let author: Option<Uuid> = PostEntity::find_by_id(post_id)
            .select_only()
            .column(PostColumn::AuthorId)
            .into_tuple()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(author.map(UserId::from))
    }
}
