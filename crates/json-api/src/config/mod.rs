//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig, db::DatabaseConfig, logging::LoggingConfig, server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod server;

/// Accounts JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "accounts-json", about = "Accounts JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Token signing and password hashing settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_required_values_are_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "accounts-json",
            "--database-url",
            "postgres://localhost/accounts",
            "--jwt-secret-key",
            "key-body",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:1323");
        assert_eq!(config.auth.jwt_expiry_duration, SignedDuration::from_hours(24));
        assert_eq!(config.auth.password_hash_cost, 10);
        assert_eq!(config.database.options().max_connections, 10);

        Ok(())
    }

    #[test]
    fn expiry_accepts_friendly_durations() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "accounts-json",
            "--database-url",
            "postgres://localhost/accounts",
            "--jwt-secret-key",
            "key-body",
            "--jwt-expiry-duration",
            "90m",
        ])?;

        assert_eq!(config.auth.options().token_ttl, SignedDuration::from_mins(90));

        Ok(())
    }
}
