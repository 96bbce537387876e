//! Get Profile Handler

use std::sync::Arc;

use salvo::prelude::*;

use super::ProfileResponse;
use crate::{
    envelope::{ApiError, Reply},
    extensions::*,
    state::State,
    users::errors::into_api_error,
};

/// Return the authenticated user's profile.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Reply<ProfileResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    let record = state
        .users
        .get_profile(user)
        .await
        .map_err(into_api_error)?;

    Ok(Reply::ok("successfully get user profile", record.into()))
}
