//! Auth Errors

use accounts_app::auth::AuthServiceError;
use tracing::{debug, error};

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: AuthServiceError) -> ApiError {
    match error {
        AuthServiceError::ValidationFailed(errors) => ApiError::validation(&errors),
        AuthServiceError::InvalidCredentials => ApiError::unauthorized(),
        AuthServiceError::Unauthenticated(source) => {
            debug!("bearer token rejected: {source}");

            ApiError::unauthorized()
        }
        AuthServiceError::Internal(source) => {
            error!(error = ?source, "auth service failed");

            ApiError::internal()
        }
    }
}
