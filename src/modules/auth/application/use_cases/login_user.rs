use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenPair, TokenProvider, UserQuery,
};

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String, // Private - guaranteed non-empty
    password: String, // Private - guaranteed non-empty
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyUsername,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyUsername => write!(f, "Username cannot be empty"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, LoginRequestError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginRequestError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            username: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.username, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown username and wrong password are indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LoginUserResponse {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub tokens: TokenPair,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

pub struct LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
    // Verified against on unknown usernames so both failures cost one hash check.
    dummy_hash: OnceCell<String>,
}

const DUMMY_PASSWORD: &str = "login-timing-placeholder";

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
            dummy_hash: OnceCell::new(),
        }
    }

    async fn verify_against_dummy(&self, password: &str) {
        let hash = self
            .dummy_hash
            .get_or_try_init(|| self.password_hasher.hash_password(DUMMY_PASSWORD))
            .await;

        if let Ok(hash) = hash {
            let _ = self.password_hasher.verify_password(password, hash).await;
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = match self
            .query
            .find_by_username(request.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
        {
            Some(user) => user,
            None => {
                self.verify_against_dummy(request.password()).await;
                warn!("Login failed: unknown username");
                return Err(LoginError::InvalidCredentials);
            }
        };

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            warn!("Login failed: wrong password for user {}", user.id);
            return Err(LoginError::InvalidCredentials);
        }

        let profile = self
            .query
            .find_profile(user.id)
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let tokens = self
            .token_provider
            .issue_pair(user.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!("User logged in: {}", user.id);

        Ok(LoginUserResponse { profile, tokens })
    }
}
