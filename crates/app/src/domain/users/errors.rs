//! Users service errors.

use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

use crate::{domain::users::ValidationErrors, errors::InternalError};

/// Reason given when a phone number is held by another active user.
pub const PHONE_NUMBER_TAKEN: &str = "phone_number has already been registered";

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("validation failed: {0}")]
    ValidationFailed(ValidationErrors),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("user not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl From<sqlx::Error> for UsersServiceError {
    fn from(error: sqlx::Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::Conflict(PHONE_NUMBER_TAKEN.to_string()),
            Some(ErrorKind::Other | _) | None => Self::Internal(InternalError::Storage(error)),
        }
    }
}
