//! Failures that surface to callers as a generic internal error.

use thiserror::Error;
use tokio::task::JoinError;

use crate::auth::{CredentialError, TokenError};

/// Infrastructure failure behind a service call.
///
/// The details are for logs only; callers render a generic message.
#[derive(Debug, Error)]
pub enum InternalError {
    #[error("storage error")]
    Storage(#[source] sqlx::Error),

    #[error("credential hashing failed")]
    Credential(#[source] CredentialError),

    #[error("token signing failed")]
    Token(#[source] TokenError),

    #[error("blocking task failed")]
    Task(#[source] JoinError),
}
