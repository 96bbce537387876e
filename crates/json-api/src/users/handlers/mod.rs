//! User Handlers

use accounts_app::domain::users::records::UserRecord;
use serde::{Deserialize, Serialize};

pub(crate) mod profile;
pub(crate) mod register;
pub(crate) mod update;

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProfileResponse {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
}

impl From<UserRecord> for ProfileResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id.into_i64(),
            full_name: user.full_name,
            phone_number: user.phone_number,
        }
    }
}
