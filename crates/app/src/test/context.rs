//! Test context for service-level integration tests.

use std::sync::Arc;

use jiff::SignedDuration;

use crate::{
    auth::{AccountsAuthService, BcryptHasher, JwtTokenService, KeyMaterial},
    domain::users::{
        AccountsUsersService, PgUsersRepository, UsersService, UsersServiceError,
        data::NewUserRequest, records::UserRecord,
    },
};

use super::{TEST_SIGNING_KEY, db::TestDb};

/// Cheapest bcrypt cost, so tests stay fast.
const TEST_HASH_COST: u32 = 4;

pub struct TestContext {
    pub db: TestDb,
    pub repository: PgUsersRepository,
    pub users: AccountsUsersService,
    pub auth: AccountsAuthService,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = TestDb::new().await;

        let repository = PgUsersRepository::new(db.pool().clone());
        let hasher = Arc::new(BcryptHasher::new(TEST_HASH_COST).expect("valid test cost"));
        let keys = Arc::new(KeyMaterial::from_pem(TEST_SIGNING_KEY).expect("valid test key"));
        let tokens = Arc::new(JwtTokenService::new(keys, SignedDuration::from_hours(1)));

        Self {
            users: AccountsUsersService::new(Arc::new(repository.clone()), hasher.clone()),
            auth: AccountsAuthService::new(Arc::new(repository.clone()), hasher, tokens),
            repository,
            db,
        }
    }

    /// Register a user through the service so the stored hash is real.
    pub async fn register(
        &self,
        full_name: &str,
        phone_number: &str,
        password: &str,
    ) -> Result<UserRecord, UsersServiceError> {
        self.users
            .register_user(NewUserRequest {
                full_name: full_name.to_string(),
                phone_number: phone_number.to_string(),
                password: password.to_string(),
            })
            .await
    }
}
