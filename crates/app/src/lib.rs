//! Shared account domain, credential and token modules.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod errors;
pub mod ids;

#[cfg(test)]
mod test;
