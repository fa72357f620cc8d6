use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserId, ports::outgoing::user_query::UserQueryError,
};

#[derive(Debug, thiserror::Error, Clone)]
pub enum DeleteUserError {
    #[error("Only the account owner may delete it")]
    Forbidden,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, actor: UserId, target: UserId) -> Result<(), DeleteUserError>;
}
