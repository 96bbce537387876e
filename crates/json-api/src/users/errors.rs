//! User Errors

use accounts_app::domain::users::UsersServiceError;
use tracing::{debug, error};

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: UsersServiceError) -> ApiError {
    match error {
        UsersServiceError::ValidationFailed(errors) => ApiError::validation(&errors),
        UsersServiceError::Conflict(reason) => {
            debug!("user conflict: {reason}");

            ApiError::conflict(&reason)
        }
        UsersServiceError::NotFound => ApiError::not_found(),
        UsersServiceError::Internal(source) => {
            error!(error = ?source, "users service failed");

            ApiError::internal()
        }
    }
}
