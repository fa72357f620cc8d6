use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{UserId, UserProfile},
    ports::outgoing::{user_query::UserQueryError, UserRepositoryError},
};
pub use crate::shared::patch::UpdateMode;
use crate::shared::patch::PatchField;
use crate::shared::validation::FieldErrors;

/// Raw profile edit. PUT must carry username and email, PATCH any subset.
#[derive(Clone, Debug, Default)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: PatchField<i32>,
    pub city: PatchField<String>,
    pub gender: PatchField<String>,
}


#[derive(Debug, thiserror::Error, Clone)]
pub enum UpdateUserError {
    #[error("Only the account owner may modify it")]
    Forbidden,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid profile data: {0}")]
    Validation(FieldErrors),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

impl From<UserRepositoryError> for UpdateUserError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::UserAlreadyExists => UpdateUserError::UserAlreadyExists,
            UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
            other => UpdateUserError::RepositoryError(other),
        }
    }
}

#[async_trait]
pub trait UpdateUserProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        target: UserId,
        mode: UpdateMode,
        input: UpdateUserInput,
    ) -> Result<UserProfile, UpdateUserError>;
}
