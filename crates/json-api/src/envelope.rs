//! Response envelope shared by every JSON endpoint.

use accounts_app::domain::users::ValidationErrors;
use salvo::{http::StatusCode, prelude::*, writing::Scribe};
use serde::{Deserialize, Serialize};

pub(crate) const INVALID_INPUT_MESSAGE: &str = "Invalid Input.";
pub(crate) const UNAUTHORIZED_MESSAGE: &str =
    "Unauthorized Access. You are not authorized to access this resource.";
pub(crate) const NOT_FOUND_MESSAGE: &str =
    "Record Does Not Exist. Please Validate Your Input Or Contact Administrator.";
pub(crate) const CONFLICT_MESSAGE: &str =
    "Record Has Existed and Must Be Unique. Please Validate Your Input Or Contact Administrator.";
pub(crate) const INTERNAL_MESSAGE: &str = "Internal Server Error. Please Call Administrator.";

/// `{ "success", "message", "data"? }`
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Successful response carrying `data`.
#[derive(Debug)]
pub(crate) struct Reply<T> {
    status: StatusCode,
    message: &'static str,
    data: T,
}

impl<T> Reply<T> {
    pub(crate) fn ok(message: &'static str, data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message,
            data,
        }
    }

    pub(crate) fn created(message: &'static str, data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            message,
            data,
        }
    }
}

impl<T> Scribe for Reply<T>
where
    T: Serialize + Send,
{
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(Envelope {
            success: true,
            message: self.message.to_string(),
            data: Some(self.data),
        }));
    }
}

/// Failed response. The message is safe to show to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_input() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_INPUT_MESSAGE)
    }

    pub(crate) fn validation(errors: &ValidationErrors) -> Self {
        Self::new(StatusCode::BAD_REQUEST, errors.to_string())
    }

    pub(crate) fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE)
    }

    pub(crate) fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    /// Uniqueness failure. The reason names the clashing field.
    pub(crate) fn conflict(reason: &str) -> Self {
        if reason.is_empty() {
            return Self::new(StatusCode::CONFLICT, CONFLICT_MESSAGE);
        }

        Self::new(StatusCode::CONFLICT, reason)
    }

    pub(crate) fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
    }

    #[cfg(test)]
    pub(crate) const fn status(&self) -> StatusCode {
        self.status
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(Envelope::<()> {
            success: false,
            message: self.message,
            data: None,
        }));
    }
}
