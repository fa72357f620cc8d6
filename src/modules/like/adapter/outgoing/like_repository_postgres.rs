use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column as LikeColumn, Entity as LikeEntity};
use crate::auth::application::domain::entities::UserId;
use crate::modules::like::application::ports::outgoing::{LikeRepository, LikeRepositoryError};
use crate::modules::post::adapter::outgoing::sea_orm_entity::Entity as PostEntity;
use crate::shared::persistence::{is_foreign_key_violation, is_unique_violation};

#[derive(Clone, Debug)]
pub struct LikeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LikeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> LikeRepositoryError {
    LikeRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl LikeRepository for LikeRepositoryPostgres {
    async fn post_exists(&self, post_id: Uuid) -> Result<bool, LikeRepositoryError> {
        let count = PostEntity::find_by_id(post_id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn insert_like(&self, user: UserId, post_id: Uuid) -> Result<bool, LikeRepositoryError> {
        let like = ActiveModel {
            user_id: Set(user.value()),
            post_id: Set(post_id),
            created_at: Set(Utc::now().fixed_offset()),
        };

        // INSERT ... ON CONFLICT (user_id, post_id) DO NOTHING
        let result = LikeEntity::insert(like)
            .on_conflict(
                OnConflict::columns([LikeColumn::UserId, LikeColumn::PostId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await;

        match result {
            Ok(rows) => Ok(rows > 0),
            Err(e) if is_unique_violation(&e) => Ok(false),
            Err(e) if is_foreign_key_violation(&e) => Err(LikeRepositoryError::PostNotFound),
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn delete_like(&self, user: UserId, post_id: Uuid) -> Result<bool, LikeRepositoryError> {
        let result = LikeEntity::delete_many()
            .filter(LikeColumn::UserId.eq(user.value()))
            .filter(LikeColumn::PostId.eq(post_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn count_likes(&self, post_id: Uuid) -> Result<u64, LikeRepositoryError> {
        LikeEntity::find()
            .filter(LikeColumn::PostId.eq(post_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}
