//! User Data

use std::fmt;

/// Registration payload with a plaintext password.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUserRequest {
    pub full_name: String,
    pub phone_number: String,
    pub password: String,
}

impl fmt::Debug for NewUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUserRequest")
            .field("full_name", &self.full_name)
            .field("phone_number", &self.phone_number)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Row to insert once the password has been hashed.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub full_name: String,
    pub phone_number: String,
    pub password_hash: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("full_name", &self.full_name)
            .field("phone_number", &self.phone_number)
            .field("password_hash", &"**redacted**")
            .finish()
    }
}

/// Partial profile change. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
}

impl ProfileUpdate {
    /// Build an update from raw form fields, treating empty strings as not supplied.
    #[must_use]
    pub fn from_fields(full_name: Option<String>, phone_number: Option<String>) -> Self {
        Self {
            full_name: full_name.filter(|value| !value.is_empty()),
            phone_number: phone_number.filter(|value| !value.is_empty()),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.phone_number.is_none()
    }
}
