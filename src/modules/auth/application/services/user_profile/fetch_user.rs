use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{UserId, UserProfile},
    ports::outgoing::UserQuery,
    use_cases::fetch_profile::{FetchUserError, FetchUserProfileUseCase, ListUsersUseCase},
};

pub struct FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
}

impl<Q> FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { user_query: query }
    }
}

#[async_trait]
impl<Q> FetchUserProfileUseCase for FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchUserError> {
        self.user_query
            .find_profile(user_id.value())
            .await?
            .ok_or_else(|| FetchUserError::UserNotFound(format!("{}", user_id.value())))
    }
}

pub struct ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { user_query: query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<UserProfile>, FetchUserError> {
        Ok(self.user_query.list_profiles().await?)
    }
}
