//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{error, info, warn};

use crate::{
    auth::{
        AuthServiceError, CredentialError, CredentialHasher, LoginOutcome, LoginRequest,
        TokenService,
    },
    domain::users::{UsersRepository, records::UserId, validation::validate_login},
    errors::InternalError,
};

#[derive(Clone)]
pub struct AccountsAuthService {
    repository: Arc<dyn UsersRepository>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: Arc<dyn TokenService>,
}

impl AccountsAuthService {
    #[must_use]
    pub fn new(
        repository: Arc<dyn UsersRepository>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    async fn check_password(
        &self,
        user_id: UserId,
        password_hash: String,
        password: String,
    ) -> Result<(), AuthServiceError> {
        let hasher = Arc::clone(&self.hasher);

        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password_hash, &password))
            .await
            .map_err(InternalError::Task)?;

        match verified {
            Ok(()) => Ok(()),
            Err(CredentialError::Mismatch) => Err(AuthServiceError::InvalidCredentials),
            Err(CredentialError::Malformed(source)) => {
                error!(%user_id, "stored password hash is unreadable: {source}");

                Err(AuthServiceError::InvalidCredentials)
            }
            Err(other) => Err(InternalError::Credential(other).into()),
        }
    }
}

impl std::fmt::Debug for AccountsAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountsAuthService").finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthService for AccountsAuthService {
    #[tracing::instrument(
        name = "auth.service.login",
        skip(self, request),
        fields(user_id = tracing::field::Empty),
        err
    )]
    async fn login(&self, request: LoginRequest) -> Result<LoginOutcome, AuthServiceError> {
        validate_login(&request).map_err(AuthServiceError::ValidationFailed)?;

        let LoginRequest {
            phone_number,
            password,
        } = request;

        let Some(user) = self.repository.find_by_phone_number(&phone_number).await? else {
            return Err(AuthServiceError::InvalidCredentials);
        };

        tracing::Span::current().record("user_id", tracing::field::display(user.id));

        self.check_password(user.id, user.password_hash.clone(), password)
            .await?;

        let token = self
            .tokens
            .issue(user.id, Timestamp::now())
            .map_err(InternalError::Token)?;

        // Best-effort counter; a failed write must not fail the login.
        match self.repository.increment_login_count(user.id).await {
            Ok(0) => warn!(user_id = %user.id, "login count not updated, user no longer active"),
            Ok(_) => {}
            Err(source) => warn!(user_id = %user.id, "failed to increment login count: {source}"),
        }

        info!(user_id = %user.id, "user logged in");

        Ok(LoginOutcome { user, token })
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserId, AuthServiceError> {
        self.tokens
            .verify(bearer_token)
            .map_err(AuthServiceError::Unauthenticated)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange a phone number and password for a signed session token.
    async fn login(&self, request: LoginRequest) -> Result<LoginOutcome, AuthServiceError>;

    /// Resolve a bearer token to the user it was issued for.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserId, AuthServiceError>;
}
