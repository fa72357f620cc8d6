use std::collections::HashMap;

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};
use uuid::Uuid;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::auth::application::domain::entities::UserProfile;
use crate::modules::post::adapter::outgoing::sea_orm_entity::{
    Column as PostColumn, Entity as PostEntity,
};
use crate::shared::persistence::{count_map, GroupCount};

/// Number of posts per author; authors without posts are absent from the map.
pub async fn posts_count_by_author<C>(
    db: &C,
    author_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, u64>, DbErr>
where
    C: ConnectionTrait,
{
    if author_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = PostEntity::find()
        .select_only()
        .column_as(PostColumn::AuthorId, "id")
        .column_as(Expr::col((PostEntity, PostColumn::Id)).count(), "total")
        .filter(PostColumn::AuthorId.is_in(author_ids))
        .group_by(PostColumn::AuthorId)
        .into_model::<GroupCount>()
        .all(db)
        .await?;

    Ok(count_map(rows))
}

/// Profiles for a batch of users in two queries (rows, then post counts).
pub async fn load_profiles<C>(
    db: &C,
    user_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, UserProfile>, DbErr>
where
    C: ConnectionTrait,
{
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let users = UserEntity::find()
        .filter(UserColumn::Id.is_in(user_ids.clone()))
        .all(db)
        .await?;

    let counts = posts_count_by_author(db, user_ids).await?;

    Ok(users
        .into_iter()
        .map(|user| {
            let posts_count = counts.get(&user.id).copied().unwrap_or(0);
            (user.id, user.to_profile(posts_count))
        })
        .collect())
}
