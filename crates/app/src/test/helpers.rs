//! Test Helpers

use jiff::Timestamp;

use crate::domain::users::records::{UserId, UserRecord};

pub(crate) const TEST_SIGNING_KEY: &str = include_str!("../auth/fixtures/test_signing_key.pem");
pub(crate) const OTHER_SIGNING_KEY: &str = include_str!("../auth/fixtures/other_signing_key.pem");

/// An in-memory user whose stored hash is the literal `stored-hash`.
pub(crate) fn sample_user(id: UserId, phone_number: &str) -> UserRecord {
    UserRecord {
        id,
        full_name: "Test User".to_string(),
        phone_number: phone_number.to_string(),
        password_hash: "stored-hash".to_string(),
        login_count: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: None,
        deleted_at: None,
    }
}
