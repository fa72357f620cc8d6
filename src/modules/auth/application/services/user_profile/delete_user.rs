use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::{
    domain::entities::UserId,
    ports::outgoing::{UserQuery, UserRepository, UserRepositoryError},
    use_cases::delete_user::{DeleteUserError, DeleteUserUseCase},
};

pub struct DeleteUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    user_query: Q,
    user_repository: R,
}

impl<Q, R> DeleteUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(user_query: Q, user_repository: R) -> Self {
        Self {
            user_query,
            user_repository,
        }
    }
}

#[async_trait]
impl<Q, R> DeleteUserUseCase for DeleteUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, actor: UserId, target: UserId) -> Result<(), DeleteUserError> {
        if self.user_query.find_by_id(target.value()).await?.is_none() {
            return Err(DeleteUserError::UserNotFound);
        }

        if actor != target {
            warn!("User {} attempted to delete account {}", actor, target);
            return Err(DeleteUserError::Forbidden);
        }

        self.user_repository
            .delete_user(target.value())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
                other => DeleteUserError::RepositoryError(other.to_string()),
            })?;

        info!("User {} deleted their account", target);
        Ok(())
    }
}
