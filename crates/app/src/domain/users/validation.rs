//! Payload validation.
//!
//! Every rule is checked and every failure collected, so a caller sees all
//! problems with a payload at once.

use std::{fmt, ops::RangeInclusive};

use crate::{
    auth::{LoginRequest, MAX_PASSWORD_BYTES},
    domain::users::data::{NewUserRequest, ProfileUpdate},
};

/// Country prefix every phone number must carry.
pub const PHONE_NUMBER_PREFIX: &str = "+62";

const PHONE_NUMBER_LENGTH: RangeInclusive<usize> = 10..=13;
const FULL_NAME_LENGTH: RangeInclusive<usize> = 3..=60;
const PASSWORD_LENGTH: RangeInclusive<usize> = 6..=64;

/// Reasons a payload was rejected, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, reason: impl Into<String>) {
        self.0.push(reason.into());
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<String>> for ValidationErrors {
    fn from(reasons: Vec<String>) -> Self {
        Self(reasons)
    }
}

/// Validate a registration payload.
///
/// # Errors
///
/// Returns every rule the payload breaks.
pub fn validate_registration(request: &NewUserRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    check_phone_number(&request.phone_number, &mut errors);
    check_full_name(&request.full_name, &mut errors);
    check_password(&request.password, &mut errors);

    errors.into_result()
}

/// Validate a login payload. Password strength is not rechecked here.
///
/// # Errors
///
/// Returns every rule the payload breaks.
pub fn validate_login(request: &LoginRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if request.phone_number.is_empty() {
        errors.push("phone_number is required");
    } else {
        check_phone_number(&request.phone_number, &mut errors);
    }

    if request.password.is_empty() {
        errors.push("password is required");
    }

    errors.into_result()
}

/// Validate the supplied fields of a profile update.
///
/// # Errors
///
/// Returns every rule the supplied fields break.
pub fn validate_profile_update(update: &ProfileUpdate) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Some(phone_number) = &update.phone_number {
        check_phone_number(phone_number, &mut errors);
    }

    if let Some(full_name) = &update.full_name {
        check_full_name(full_name, &mut errors);
    }

    errors.into_result()
}

fn check_phone_number(phone_number: &str, errors: &mut ValidationErrors) {
    if !phone_number.starts_with(PHONE_NUMBER_PREFIX) {
        errors.push(format!(
            "phone_number field must start with {PHONE_NUMBER_PREFIX}"
        ));
    }

    check_length("phone_number", phone_number, &PHONE_NUMBER_LENGTH, errors);
}

fn check_full_name(full_name: &str, errors: &mut ValidationErrors) {
    check_length("full_name", full_name, &FULL_NAME_LENGTH, errors);
}

fn check_password(password: &str, errors: &mut ValidationErrors) {
    check_length("password", password, &PASSWORD_LENGTH, errors);

    if password.len() > MAX_PASSWORD_BYTES {
        errors.push(format!(
            "password must be at most {MAX_PASSWORD_BYTES} bytes"
        ));
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("password must contain 1 upper case");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("password must contain 1 number");
    }

    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        errors.push("password must contain 1 special character");
    }
}

fn check_length(
    field: &str,
    value: &str,
    bounds: &RangeInclusive<usize>,
    errors: &mut ValidationErrors,
) {
    if !bounds.contains(&value.chars().count()) {
        errors.push(format!(
            "{field} must be between {} to {} characters long",
            bounds.start(),
            bounds.end()
        ));
    }
}
