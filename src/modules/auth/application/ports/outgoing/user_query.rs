// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Gender, UserProfile};

/// Full user row, including the password hash. Never serialized.
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub city: Option<String>,
    pub gender: Option<Gender>,
    pub date_joined: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError>;

    /// Exact match, used for login.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError>;

    /// Case-insensitive; `exclude` skips the user being edited.
    async fn username_exists(
        &self,
        username: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, UserQueryError>;

    /// Case-insensitive; `exclude` skips the user being edited.
    async fn email_exists(&self, email: &str, exclude: Option<Uuid>)
        -> Result<bool, UserQueryError>;

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, UserQueryError>;

    /// All users ordered by username.
    async fn list_profiles(&self) -> Result<Vec<UserProfile>, UserQueryError>;
}
