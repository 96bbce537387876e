//! App Context

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::{
    auth::{
        AccountsAuthService, AuthOptions, AuthService, BcryptHasher, CredentialError,
        JwtTokenService, KeyError, KeyMaterial,
    },
    database::{self, DatabaseOptions},
    domain::users::{AccountsUsersService, PgUsersRepository, UsersService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to load JWT signing key")]
    SigningKey(#[from] KeyError),

    #[error("invalid password hash cost")]
    HashCost(#[from] CredentialError),

    #[error("token lifetime must be positive")]
    TokenTtl,
}

#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UsersService>,
    pub auth: Arc<dyn AuthService>,
    pub pool: PgPool,
}

impl AppContext {
    /// Build the application context: load keys, then connect to the database.
    ///
    /// # Errors
    ///
    /// Returns an error when the auth options are invalid or the database is unreachable.
    pub async fn from_options(
        database: &DatabaseOptions,
        auth: &AuthOptions,
    ) -> Result<Self, AppInitError> {
        if !auth.token_ttl.is_positive() {
            return Err(AppInitError::TokenTtl);
        }

        let keys = Arc::new(KeyMaterial::from_pem(&auth.signing_key)?);
        let hasher = Arc::new(BcryptHasher::new(auth.hash_cost)?);
        let tokens = Arc::new(JwtTokenService::new(keys, auth.token_ttl));

        let pool = database::connect(database)
            .await
            .map_err(AppInitError::Database)?;

        let repository = Arc::new(PgUsersRepository::new(pool.clone()));

        Ok(Self {
            users: Arc::new(AccountsUsersService::new(repository.clone(), hasher.clone())),
            auth: Arc::new(AccountsAuthService::new(repository, hasher, tokens)),
            pool,
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
