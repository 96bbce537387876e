//! Account Domain Concerns

pub mod users;
