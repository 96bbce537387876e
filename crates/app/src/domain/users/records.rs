//! User Records

use std::fmt;

use jiff::Timestamp;

use crate::ids::TypedId;

/// User ID
pub type UserId = TypedId<UserRecord>;

/// Stored user account.
///
/// `password_hash` never leaves the service layer; `Debug` redacts it.
#[derive(Clone)]
pub struct UserRecord {
    pub id: UserId,
    pub full_name: String,
    pub phone_number: String,
    pub password_hash: String,
    pub login_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
}

impl UserRecord {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("full_name", &self.full_name)
            .field("phone_number", &self.phone_number)
            .field("password_hash", &"**redacted**")
            .field("login_count", &self.login_count)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("deleted_at", &self.deleted_at)
            .finish()
    }
}
