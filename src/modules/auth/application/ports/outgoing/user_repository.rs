use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Gender;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub city: Option<String>,
    pub gender: Option<Gender>,
}

/// `None` / `Unset` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: PatchField<i32>,
    pub city: PatchField<String>,
    pub gender: PatchField<Gender>,
}

#[derive(Debug, Clone)]
pub struct UserResult {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    async fn update_user(
        &self,
        user_id: Uuid,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError>;

    /// Hard delete; posts, comments and likes go with the row.
    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
