//! Update Profile Handler

use std::sync::Arc;

use accounts_app::domain::users::data::ProfileUpdate;
use salvo::prelude::*;
use serde::Deserialize;

use super::ProfileResponse;
use crate::{
    envelope::{ApiError, Reply},
    extensions::*,
    state::State,
    users::errors::into_api_error,
};

/// Update Profile Request
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UpdateProfileRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        Self::from_fields(request.full_name, request.phone_number)
    }
}

/// Partially update the authenticated user's profile.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Reply<ProfileResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    let request = req
        .parse_json::<UpdateProfileRequest>()
        .await
        .map_err(|_parse_error| ApiError::invalid_input())?;

    let record = state
        .users
        .update_profile(user, request.into())
        .await
        .map_err(into_api_error)?;

    Ok(Reply::ok("successfully update user profile", record.into()))
}
