//! Auth models.

use std::fmt;

use jiff::SignedDuration;

use crate::{auth::DEFAULT_HASH_COST, domain::users::records::UserRecord};

/// Default session token lifetime.
pub const DEFAULT_TOKEN_TTL: SignedDuration = SignedDuration::from_hours(24);

/// Phone number and plaintext password presented at login.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("phone_number", &self.phone_number)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// A successful login: the user and a freshly signed session token.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: UserRecord,
    pub token: String,
}

/// Credential and token settings resolved at startup.
#[derive(Clone)]
pub struct AuthOptions {
    /// RSA private key, PEM or bare base64 body.
    pub signing_key: String,
    pub token_ttl: SignedDuration,
    pub hash_cost: u32,
}

impl AuthOptions {
    #[must_use]
    pub fn new(signing_key: String) -> Self {
        Self {
            signing_key,
            token_ttl: DEFAULT_TOKEN_TTL,
            hash_cost: DEFAULT_HASH_COST,
        }
    }
}

impl fmt::Debug for AuthOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthOptions")
            .field("signing_key", &"**redacted**")
            .field("token_ttl", &self.token_ttl)
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}
