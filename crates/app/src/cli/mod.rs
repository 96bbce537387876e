use accounts_app::{
    auth::{JwtTokenService, KeyMaterial},
    database::DatabaseOptions,
};
use clap::{Args, Parser, Subcommand};
use jiff::SignedDuration;

mod db;
mod token;
mod user;

#[derive(Debug, Parser)]
#[command(name = "accounts-app", about = "Accounts administration CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    User(user::UserCommand),
    Token(token::TokenCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::User(command) => user::run(command).await,
            Commands::Token(command) => token::run(command),
            Commands::Db(command) => db::run(command).await,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) fn options(&self) -> DatabaseOptions {
        DatabaseOptions::new(self.database_url.clone())
    }
}

#[derive(Debug, Args)]
pub(crate) struct SigningKeyArgs {
    /// RSA private key, PEM or bare base64 body
    #[arg(long = "jwt-private-key", env = "JWT_SECRET_KEY", hide_env_values = true)]
    signing_key: String,

    /// Token lifetime, e.g. `24h` or `90m`
    #[arg(long = "jwt-expiry", env = "JWT_EXPIRY_DURATION", default_value = "24h")]
    token_ttl: SignedDuration,
}

impl SigningKeyArgs {
    pub(crate) fn key_material(&self) -> Result<KeyMaterial, String> {
        KeyMaterial::from_pem(&self.signing_key)
            .map_err(|error| format!("failed to load signing key: {error}"))
    }

    pub(crate) fn token_service(&self) -> Result<JwtTokenService, String> {
        if !self.token_ttl.is_positive() {
            return Err("jwt-expiry must be positive".to_string());
        }

        Ok(JwtTokenService::new(
            self.key_material()?.into(),
            self.token_ttl,
        ))
    }
}
