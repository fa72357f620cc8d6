use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Entity as CommentEntity};
use crate::modules::comment::application::ports::outgoing::{
    CommentRecord, CommentRepository, CommentRepositoryError, CreateCommentData,
};
use crate::shared::persistence::is_foreign_key_violation;

#[derive(Clone, Debug)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CommentRepositoryError {
    CommentRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentRecord, CommentRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            post_id: Set(data.post_id),
            author_id: Set(data.author.value()),
            text: Set(data.text),
            created_at: Set(Utc::now().fixed_offset()),
        };

        // The author was authenticated a moment ago; a rejected key is the post.
        let inserted = model.insert(&*self.db).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                CommentRepositoryError::PostNotFound
            } else {
                map_db_err(e)
            }
        })?;

        Ok(inserted.to_record())
    }

    async fn update_comment(
        &self,
        comment_id: Uuid,
        text: String,
    ) -> Result<CommentRecord, CommentRepositoryError> {
        let comment = CommentEntity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CommentRepositoryError::NotFound)?;

        let mut model: ActiveModel = comment.into();
        model.text = Set(text);

        let updated = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => CommentRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(updated.to_record())
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        let result = CommentEntity::delete_by_id(comment_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::NotFound);
        }

        Ok(())
    }
}
