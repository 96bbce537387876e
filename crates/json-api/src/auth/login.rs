//! Login Handler

use std::sync::Arc;

use accounts_app::auth::LoginRequest;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    auth::errors::into_api_error,
    envelope::{ApiError, Reply},
    extensions::*,
    state::State,
};

/// Login Request
#[derive(Deserialize)]
pub(crate) struct LoginPayload {
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub password: String,
}

impl From<LoginPayload> for LoginRequest {
    fn from(payload: LoginPayload) -> Self {
        Self {
            phone_number: payload.phone_number,
            password: payload.password,
        }
    }
}

/// Logged In Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct LoggedInResponse {
    pub id: i64,
    pub jwt: String,
}

/// Exchange phone number and password for a session token.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Reply<LoggedInResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let payload = req
        .parse_json::<LoginPayload>()
        .await
        .map_err(|_parse_error| ApiError::invalid_input())?;

    let outcome = state
        .auth
        .login(payload.into())
        .await
        .map_err(into_api_error)?;

    Ok(Reply::ok(
        "successfully logged-in user",
        LoggedInResponse {
            id: outcome.user.id.into_i64(),
            jwt: outcome.token,
        },
    ))
}
