use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use super::user_profiles::posts_count_by_author;
use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::outgoing::user_query::UserQueryError;
use crate::auth::application::ports::outgoing::user_query::UserQueryResult;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn lower_eq(column: UserColumn, value: &str) -> sea_orm::sea_query::SimpleExpr {
        Expr::expr(Func::lower(Expr::col((UserEntity, column)))).eq(value.to_lowercase())
    }

    fn excluding(select: Select<UserEntity>, exclude: Option<Uuid>) -> Select<UserEntity> {
        match exclude {
            Some(id) => select.filter(UserColumn::Id.ne(id)),
            None => select,
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.to_query_result()))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.to_query_result()))
    }

    async fn username_exists(
        &self,
        username: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, UserQueryError> {
        let select =
            UserEntity::find().filter(Self::lower_eq(UserColumn::Username, username));

        let found = Self::excluding(select, exclude)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    async fn email_exists(
        &self,
        email: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, UserQueryError> {
        let select = UserEntity::find().filter(Self::lower_eq(UserColumn::Email, email));

        let found = Self::excluding(select, exclude)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, UserQueryError> {
        let Some(user) = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
        else {
            return Ok(None);
        };

        let counts = posts_count_by_author(&*self.db, vec![user.id])
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(Some(user.to_profile(counts.get(&user.id).copied().unwrap_or(0))))
    }

    async fn list_profiles(&self) -> Result<Vec<UserProfile>, UserQueryError> {
        let users = UserEntity::find()
            .order_by_asc(UserColumn::Username)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        let counts = posts_count_by_author(&*self.db, users.iter().map(|u| u.id).collect())
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(users
            .iter()
            .map(|u| u.to_profile(counts.get(&u.id).copied().unwrap_or(0)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};

    fn create_mock_user_model(id: Uuid, username: &str) -> UserModel {
        UserModel {
            id,
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: "hashed_password".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            age: Some(25),
            city: Some("Oslo".to_string()),
            gender: Some("F".to_string()),
            date_joined: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_success() {
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(user_id, "testuser")]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query.find_by_id(user_id).await.unwrap().unwrap();

        assert_eq!(user.id, user_id);
        assert_eq!(user.username, "testuser");
        assert_eq!(user.password_hash, "hashed_password");
    }

    #[tokio::test]
    async fn test_find_by_id_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_id(Uuid::new_v4()).await;

        match result {
            Err(UserQueryError::DatabaseError(msg)) => assert!(msg.contains("connection timeout")),
            _ => panic!("Expected DatabaseError"),
        }
    }

    #[tokio::test]
    async fn test_username_exists_uses_lowercase_comparison() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(Uuid::new_v4(), "Alice")]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        assert!(query.username_exists("ALICE", None).await.unwrap());

        let Ok(db) = Arc::try_unwrap(query.db) else {
            panic!("connection still shared");
        };
        let log = db.into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("LOWER"), "unexpected SQL: {}", sql);
        assert!(sql.contains("alice"), "unexpected SQL: {}", sql);
    }

    #[tokio::test]
    async fn test_email_exists_false_when_no_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        assert!(!query
            .email_exists("free@example.com", Some(Uuid::new_v4()))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_find_profile_with_posts_count() {
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(user_id, "alice")]])
            .append_query_results(vec![vec![btreemap! {
                "id" => Value::from(user_id),
                "total" => Value::from(4i64),
            }]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let profile = query.find_profile(user_id).await.unwrap().unwrap();

        assert_eq!(profile.posts_count, 4);
        assert_eq!(profile.city.as_deref(), Some("Oslo"));
    }

    #[tokio::test]
    async fn test_find_profile_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        assert!(query.find_profile(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_profiles_keeps_query_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                create_mock_user_model(a, "alice"),
                create_mock_user_model(b, "bob"),
            ]])
            .append_query_results(vec![vec![btreemap! {
                "id" => Value::from(b),
                "total" => Value::from(1i64),
            }]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let profiles = query.list_profiles().await.unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].username, "alice");
        assert_eq!(profiles[0].posts_count, 0);
        assert_eq!(profiles[1].posts_count, 1);
    }
}
