use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::{
    domain::entities::{Gender, UserId, UserProfile},
    domain::rules::{check_age, check_city, check_email, check_username, NAME_MAX_LEN},
    ports::outgoing::{UpdateUserData, UserQuery, UserRepository},
    use_cases::update_profile::{
        UpdateMode, UpdateUserError, UpdateUserInput, UpdateUserProfileUseCase,
    },
};
use crate::shared::patch::PatchField;
use crate::shared::validation::{FieldErrors, REQUIRED};

pub struct UpdateUserProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    user_query: Q,
    user_repository: R,
}

impl<Q, R> UpdateUserProfileService<Q, R>
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

    async fn validate(
        &self,
        target: UserId,
        mode: UpdateMode,
        input: UpdateUserInput,
    ) -> Result<UpdateUserData, UpdateUserError> {
        let mut errors = FieldErrors::new();

        if mode == UpdateMode::Replace {
            if input.username.is_none() {
                errors.add("username", REQUIRED);
            }
            if input.email.is_none() {
                errors.add("email", REQUIRED);
            }
        }

        let username = match input.username.as_deref() {
            Some(raw) => check_username(&mut errors, Some(raw)),
            None => None,
        };
        let email = match input.email.as_deref() {
            Some(raw) => check_email(&mut errors, Some(raw)),
            None => None,
        };

        let first_name = input
            .first_name
            .map(|name| name_field(&mut errors, "first_name", name));
        let last_name = input
            .last_name
            .map(|name| name_field(&mut errors, "last_name", name));

        let age = match input.age {
            PatchField::Value(age) => match check_age(&mut errors, age) {
                Some(age) => PatchField::Value(age),
                None => PatchField::Unset,
            },
            other => other,
        };

        let city = match input.city {
            PatchField::Value(city) => match check_city(&mut errors, &city) {
                Some(city) => PatchField::Value(city),
                None => PatchField::Unset,
            },
            other => other,
        };

        let gender = match input.gender {
            PatchField::Value(code) => match Gender::from_code(code.trim()) {
                Some(gender) => PatchField::Value(gender),
                None => {
                    errors.add("gender", format!("\"{}\" is not a valid choice.", code));
                    PatchField::Unset
                }
            },
            PatchField::Null => PatchField::Null,
            PatchField::Unset => PatchField::Unset,
        };

        if let Some(username) = &username {
            if self
                .user_query
                .username_exists(username, Some(target.value()))
                .await?
            {
                errors.add("username", "A user with that username already exists.");
            }
        }

        if let Some(email) = &email {
            if self
                .user_query
                .email_exists(email, Some(target.value()))
                .await?
            {
                errors.add("email", "User with this email already exists.");
            }
        }

        errors.into_result().map_err(UpdateUserError::Validation)?;

        Ok(UpdateUserData {
            username,
            email,
            first_name,
            last_name,
            age,
            city,
            gender,
        })
    }
}

fn name_field(errors: &mut FieldErrors, field: &str, value: String) -> String {
    let value = value.trim().to_string();
    if value.chars().count() > NAME_MAX_LEN {
        errors.add(
            field,
            format!(
                "Ensure this field has no more than {} characters.",
                NAME_MAX_LEN
            ),
        );
    }
    value
}

#[async_trait]
impl<Q, R> UpdateUserProfileUseCase for UpdateUserProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        target: UserId,
        mode: UpdateMode,
        input: UpdateUserInput,
    ) -> Result<UserProfile, UpdateUserError> {
        if self.user_query.find_by_id(target.value()).await?.is_none() {
            return Err(UpdateUserError::UserNotFound);
        }

        if actor != target {
            warn!("User {} attempted to edit profile of {}", actor, target);
            return Err(UpdateUserError::Forbidden);
        }

        let data = self.validate(target, mode, input).await?;

        self.user_repository
            .update_user(target.value(), data)
            .await?;

        info!("Profile updated for user {}", target);

        self.user_query
            .find_profile(target.value())
            .await?
            .ok_or(UpdateUserError::UserNotFound)
    }
}
