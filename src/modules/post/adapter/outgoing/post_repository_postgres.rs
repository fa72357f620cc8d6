use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Entity as PostEntity};
use crate::modules::post::application::ports::outgoing::{
    CreatePostData, PostRecord, PostRepository, PostRepositoryError, UpdatePostData,
};
use crate::shared::persistence::is_foreign_key_violation;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone, Debug)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create_post(&self, data: CreatePostData) -> Result<PostRecord, PostRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            author_id: Set(data.author.value()),
            title: Set(data.title),
            content: Set(data.content),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                PostRepositoryError::AuthorNotFound
            } else {
                map_db_err(e)
            }
        })?;

        Ok(inserted.to_record())
    }

    async fn update_post(
        &self,
        post_id: Uuid,
        data: UpdatePostData,
    ) -> Result<PostRecord, PostRepositoryError> {
        let post = PostEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PostRepositoryError::NotFound)?;

        if data.title.is_none() && data.content.is_none() {
            return Ok(post.to_record());
        }

        let mut model: ActiveModel = post.into();

        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(content) = data.content {
            model.content = Set(content);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => PostRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(updated.to_record())
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let result = PostEntity::delete_by_id(post_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> PostRepositoryError {
    PostRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
