//! Auth service errors.

use thiserror::Error;

use crate::{auth::TokenError, domain::users::ValidationErrors, errors::InternalError};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("validation failed: {0}")]
    ValidationFailed(ValidationErrors),

    /// Unknown phone number or wrong password. Never says which.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("unauthenticated")]
    Unauthenticated(#[source] TokenError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl From<sqlx::Error> for AuthServiceError {
    fn from(error: sqlx::Error) -> Self {
        Self::Internal(InternalError::Storage(error))
    }
}
