//! Auth Config

use std::fmt;

use accounts_app::auth::{AuthOptions, DEFAULT_HASH_COST};
use clap::Args;
use jiff::SignedDuration;

/// Token signing and password hashing settings.
#[derive(Args)]
pub struct AuthConfig {
    /// RSA private key used to sign session tokens, PEM or bare base64 body
    #[arg(long, env = "JWT_SECRET_KEY", hide_env_values = true)]
    pub jwt_secret_key: String,

    /// Session token lifetime, e.g. `24h` or `90m`
    #[arg(long, env = "JWT_EXPIRY_DURATION", default_value = "24h")]
    pub jwt_expiry_duration: SignedDuration,

    /// bcrypt work factor
    #[arg(long, env = "PASSWORD_HASH_COST", default_value_t = DEFAULT_HASH_COST)]
    pub password_hash_cost: u32,
}

impl AuthConfig {
    #[must_use]
    pub fn options(&self) -> AuthOptions {
        AuthOptions {
            signing_key: self.jwt_secret_key.clone(),
            token_ttl: self.jwt_expiry_duration,
            hash_cost: self.password_hash_cost,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret_key", &"**redacted**")
            .field("jwt_expiry_duration", &self.jwt_expiry_duration)
            .field("password_hash_cost", &self.password_hash_cost)
            .finish()
    }
}
