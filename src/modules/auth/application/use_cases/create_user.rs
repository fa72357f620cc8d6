use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::domain::rules::{
    check_email, check_gender, check_required_age, check_username, CITY_MAX_LEN, NAME_MAX_LEN,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, TokenPair, TokenProvider, UserQuery, UserRepository,
    UserRepositoryError,
};
use crate::shared::validation::{required_text, FieldErrors, BLANK, REQUIRED};

// ========================= Register Input =========================
/// Raw registration form; every field is optional so that all problems are
/// reported together instead of failing on the first missing key.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password2: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub city: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct CreateUserOutput {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub tokens: TokenPair,
}

// ====================== Register Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Invalid registration data: {0}")]
    Validation(FieldErrors),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ============================ Create User Use Case =============================
#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }

    /// Field checks first, then uniqueness checks for the fields that passed.
    async fn validate(
        &self,
        input: &CreateUserInput,
    ) -> Result<(CreateUserData, String), CreateUserError> {
        let mut errors = FieldErrors::new();

        let username = check_username(&mut errors, input.username.as_deref());
        let email = check_email(&mut errors, input.email.as_deref());

        let password = match input.password.as_deref() {
            Some(p) if !p.is_empty() => Some(p.to_string()),
            Some(_) => {
                errors.add("password", BLANK);
                None
            }
            None => {
                errors.add("password", REQUIRED);
                None
            }
        };
        if password.is_some() && input.password != input.password2 {
            errors.add("non_field_errors", "Passwords do not match");
        }

        let first_name = required_text(
            &mut errors,
            "first_name",
            input.first_name.as_deref(),
            Some(NAME_MAX_LEN),
        );
        let last_name = required_text(
            &mut errors,
            "last_name",
            input.last_name.as_deref(),
            Some(NAME_MAX_LEN),
        );
        let age = check_required_age(&mut errors, input.age);
        let city = required_text(
            &mut errors,
            "city",
            input.city.as_deref(),
            Some(CITY_MAX_LEN),
        );
        let gender = check_gender(&mut errors, input.gender.as_deref());

        if let Some(username) = &username {
            let taken = self
                .query
                .username_exists(username, None)
                .await
                .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
            if taken {
                errors.add("username", "A user with that username already exists.");
            }
        }

        if let Some(email) = &email {
            let taken = self
                .query
                .email_exists(email, None)
                .await
                .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
            if taken {
                errors.add("email", "User with this email already exists.");
            }
        }

        errors.into_result().map_err(CreateUserError::Validation)?;

        let (Some(username), Some(email), Some(password), Some(first_name), Some(last_name)) =
            (username, email, password, first_name, last_name)
        else {
            return Err(CreateUserError::Validation(FieldErrors::single(
                "non_field_errors",
                "Invalid input",
            )));
        };

        Ok((
            CreateUserData {
                username,
                email,
                password_hash: String::new(),
                first_name,
                last_name,
                age,
                city,
                gender,
            },
            password,
        ))
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        let (mut data, password) = match self.validate(&input).await {
            Ok(validated) => validated,
            Err(e) => {
                warn!("Registration rejected: {}", e);
                return Err(e);
            }
        };

        data.password_hash = self
            .password_hasher
            .hash_password(&password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let created = self
            .repository
            .create_user(data.clone())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
                other => CreateUserError::RepositoryError(other.to_string()),
            })?;

        let tokens = self
            .token_provider
            .issue_pair(created.id)
            .map_err(|e| CreateUserError::TokenGenerationFailed(e.to_string()))?;

        info!("User registered: {} ({})", created.username, created.id);

        Ok(CreateUserOutput {
            profile: UserProfile {
                id: created.id,
                username: created.username,
                email: created.email,
                first_name: data.first_name,
                last_name: data.last_name,
                posts_count: 0,
                age: data.age,
                city: data.city,
                gender: data.gender,
            },
            tokens,
        })
    }
}
