use async_trait::async_trait;

use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckAvailabilityError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Read-only hints for signup forms. Registration re-checks on its own.
#[async_trait]
pub trait CheckAvailabilityUseCase: Send + Sync {
    async fn username_available(&self, username: &str) -> Result<bool, CheckAvailabilityError>;
    async fn email_available(&self, email: &str) -> Result<bool, CheckAvailabilityError>;
}

pub struct CheckAvailabilityService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> CheckAvailabilityService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> CheckAvailabilityUseCase for CheckAvailabilityService<Q>
where
    Q: UserQuery,
{
    async fn username_available(&self, username: &str) -> Result<bool, CheckAvailabilityError> {
        let username = username.trim();
        if username.is_empty() {
            return Ok(true);
        }

        let exists = self
            .query
            .username_exists(username, None)
            .await
            .map_err(|e| CheckAvailabilityError::QueryError(e.to_string()))?;

        Ok(!exists)
    }

    async fn email_available(&self, email: &str) -> Result<bool, CheckAvailabilityError> {
        let email = email.trim();
        if email.is_empty() {
            return Ok(true);
        }

        let exists = self
            .query
            .email_exists(&email.to_lowercase(), None)
            .await
            .map_err(|e| CheckAvailabilityError::QueryError(e.to_string()))?;

        Ok(!exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fakes::InMemoryUsers;

    #[tokio::test]
    async fn taken_username_is_unavailable_in_any_case() {
        let users = InMemoryUsers::default();
        users.add_user("Alice", "alice@example.com", "pw");
        let service = CheckAvailabilityService::new(users);

        assert!(!service.username_available("alice").await.unwrap());
        assert!(!service.username_available("ALICE").await.unwrap());
        assert!(service.username_available("bob").await.unwrap());
    }

    #[tokio::test]
    async fn taken_email_is_unavailable_in_any_case() {
        let users = InMemoryUsers::default();
        users.add_user("alice", "alice@example.com", "pw");
        let service = CheckAvailabilityService::new(users);

        assert!(!service.email_available("Alice@Example.com").await.unwrap());
        assert!(service.email_available("bob@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn empty_input_reports_available() {
        let service = CheckAvailabilityService::new(InMemoryUsers::default().failing_queries());

        assert!(service.username_available("").await.unwrap());
        assert!(service.email_available("  ").await.unwrap());
    }

    #[tokio::test]
    async fn query_errors_propagate() {
        let service = CheckAvailabilityService::new(InMemoryUsers::default().failing_queries());

        assert!(matches!(
            service.username_available("alice").await,
            Err(CheckAvailabilityError::QueryError(_))
        ));
    }
}
