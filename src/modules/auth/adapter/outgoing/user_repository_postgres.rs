use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UpdateUserData, UserResult,
};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::shared::patch::PatchField;
use crate::shared::persistence::is_unique_violation;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user_result(model: UserModel) -> UserResult {
        UserResult {
            id: model.id,
            email: model.email,
            username: model.username,
        }
    }

    fn map_write_error(e: DbErr) -> UserRepositoryError {
        if is_unique_violation(&e) {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

fn patch<T>(field: PatchField<T>) -> sea_orm::ActiveValue<Option<T>>
where
    Option<T>: Into<sea_orm::Value>,
{
    match field {
        PatchField::Unset => NotSet,
        PatchField::Null => Set(None),
        PatchField::Value(v) => Set(Some(v)),
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            age: Set(user.age),
            city: Set(user.city),
            gender: Set(user.gender.map(|g| g.code().to_string())),
            date_joined: Set(chrono::Utc::now().into()),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(Self::map_to_user_result(inserted))
    }

    async fn update_user(
        &self,
        user_id: Uuid,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.clone().into();

        if let Some(username) = data.username {
            active_user.username = Set(username);
        }
        if let Some(email) = data.email {
            active_user.email = Set(email);
        }
        if let Some(first_name) = data.first_name {
            active_user.first_name = Set(first_name);
        }
        if let Some(last_name) = data.last_name {
            active_user.last_name = Set(last_name);
        }
        active_user.age = patch(data.age);
        active_user.city = patch(data.city);
        active_user.gender = patch(data.gender.map(|g| g.code().to_string()));

        if !active_user.is_changed() {
            return Ok(Self::map_to_user_result(user));
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(Self::map_to_user_result(updated))
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(user_id)
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Gender;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_test_user_data() -> CreateUserData {
        CreateUserData {
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            age: Some(28),
            city: None,
            gender: Some(Gender::Male),
        }
    }

    fn stored_model(id: Uuid, data: &CreateUserData) -> UserModel {
        UserModel {
            id,
            username: data.username.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            age: data.age,
            city: data.city.clone(),
            gender: data.gender.map(|g| g.code().to_string()),
            date_joined: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let user_data = create_test_user_data();
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored_model(user_id, &user_data)]])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository.create_user(user_data.clone()).await.unwrap();

        assert_eq!(result.id, user_id);
        assert_eq!(result.username, user_data.username);
        assert_eq!(result.email, user_data.email);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_key_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
            )])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository.create_user(create_test_user_data()).await;

        assert_eq!(result.unwrap_err(), UserRepositoryError::UserAlreadyExists);
    }

    #[tokio::test]
    async fn test_create_user_other_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository.create_user(create_test_user_data()).await;

        assert!(matches!(result, Err(UserRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_update_user_applies_fields() {
        let data = create_test_user_data();
        let user_id = Uuid::new_v4();
        let before = stored_model(user_id, &data);
        let mut after = before.clone();
        after.username = "renamed".to_string();
        after.age = None;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![before]])
            .append_query_results(vec![vec![after]])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let update = UpdateUserData {
            username: Some("renamed".to_string()),
            age: PatchField::Null,
            ..Default::default()
        };

        let result = repository.update_user(user_id, update).await.unwrap();

        assert_eq!(result.username, "renamed");
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .update_user(Uuid::new_v4(), UpdateUserData::default())
            .await;

        assert_eq!(result.unwrap_err(), UserRepositoryError::UserNotFound);
    }

    #[tokio::test]
    async fn test_update_user_unique_violation() {
        let data = create_test_user_data();
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored_model(user_id, &data)]])
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_users_username_lower\""
                    .to_string(),
            )])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let update = UpdateUserData {
            username: Some("taken".to_string()),
            ..Default::default()
        };

        let result = repository.update_user(user_id, update).await;

        assert_eq!(result.unwrap_err(), UserRepositoryError::UserAlreadyExists);
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        assert!(repository.delete_user(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository.delete_user(Uuid::new_v4()).await;

        assert_eq!(result.unwrap_err(), UserRepositoryError::UserNotFound);
    }
}
