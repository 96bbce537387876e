//! Users service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    auth::CredentialHasher,
    domain::users::{
        UsersRepository,
        data::{NewUser, NewUserRequest, ProfileUpdate},
        errors::{PHONE_NUMBER_TAKEN, UsersServiceError},
        records::{UserId, UserRecord},
        validation::{validate_profile_update, validate_registration},
    },
    errors::InternalError,
};

#[derive(Clone)]
pub struct AccountsUsersService {
    repository: Arc<dyn UsersRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl AccountsUsersService {
    #[must_use]
    pub fn new(repository: Arc<dyn UsersRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { repository, hasher }
    }

    async fn hash_password(&self, password: String) -> Result<String, UsersServiceError> {
        let hasher = Arc::clone(&self.hasher);

        let hashed = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(InternalError::Task)?
            .map_err(InternalError::Credential)?;

        Ok(hashed)
    }
}

impl std::fmt::Debug for AccountsUsersService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountsUsersService").finish_non_exhaustive()
    }
}

#[async_trait]
impl UsersService for AccountsUsersService {
    #[tracing::instrument(
        name = "users.service.register_user",
        skip(self, request),
        fields(user_id = tracing::field::Empty),
        err
    )]
    async fn register_user(&self, request: NewUserRequest) -> Result<UserRecord, UsersServiceError> {
        validate_registration(&request).map_err(UsersServiceError::ValidationFailed)?;

        if self
            .repository
            .find_by_phone_number(&request.phone_number)
            .await?
            .is_some()
        {
            return Err(UsersServiceError::Conflict(PHONE_NUMBER_TAKEN.to_string()));
        }

        let NewUserRequest {
            full_name,
            phone_number,
            password,
        } = request;

        let password_hash = self.hash_password(password).await?;

        let user = self
            .repository
            .create_user(NewUser {
                full_name,
                phone_number,
                password_hash,
            })
            .await?;

        tracing::Span::current().record("user_id", tracing::field::display(user.id));
        info!("registered user");

        Ok(user)
    }

    async fn get_profile(&self, user: UserId) -> Result<UserRecord, UsersServiceError> {
        self.repository
            .find_by_id(user)
            .await?
            .ok_or(UsersServiceError::NotFound)
    }

    #[tracing::instrument(
        name = "users.service.update_profile",
        skip(self, update),
        fields(user_id = %user),
        err
    )]
    async fn update_profile(
        &self,
        user: UserId,
        update: ProfileUpdate,
    ) -> Result<UserRecord, UsersServiceError> {
        validate_profile_update(&update).map_err(UsersServiceError::ValidationFailed)?;

        let current = self.get_profile(user).await?;

        if update.is_empty() {
            return Ok(current);
        }

        if let Some(phone_number) = &update.phone_number
            && *phone_number != current.phone_number
            && let Some(holder) = self.repository.find_by_phone_number(phone_number).await?
            && holder.id != current.id
        {
            return Err(UsersServiceError::Conflict(PHONE_NUMBER_TAKEN.to_string()));
        }

        self.repository
            .update_profile(user, update)
            .await?
            .ok_or(UsersServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Validate, check phone uniqueness, hash the password and store a new user.
    async fn register_user(&self, request: NewUserRequest) -> Result<UserRecord, UsersServiceError>;

    /// Load the active user with the given id.
    async fn get_profile(&self, user: UserId) -> Result<UserRecord, UsersServiceError>;

    /// Apply a partial profile update and return the stored result.
    async fn update_profile(
        &self,
        user: UserId,
        update: ProfileUpdate,
    ) -> Result<UserRecord, UsersServiceError>;
}
