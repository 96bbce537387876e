//! Password hashing.

use std::fmt;

use bcrypt::BcryptError;
use mockall::automock;
use thiserror::Error;

/// Work factor used when none is configured.
pub const DEFAULT_HASH_COST: u32 = 10;

/// Longest password bcrypt hashes without truncation. Its 72 byte key includes a NUL terminator.
pub const MAX_PASSWORD_BYTES: usize = 71;

const MIN_HASH_COST: u32 = 4;
const MAX_HASH_COST: u32 = 31;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("password does not match")]
    Mismatch,

    #[error("stored password hash is malformed")]
    Malformed(#[source] BcryptError),

    #[error("failed to hash password")]
    Hashing(#[source] BcryptError),

    #[error("password is {0} bytes, longer than bcrypt accepts")]
    TooLong(usize),

    #[error("hash cost {0} is outside the supported range 4..=31")]
    UnsupportedCost(u32),
}

/// One-way salted password hashing.
///
/// Implementations are CPU bound; async callers should run them on a blocking thread.
#[automock]
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext password with a fresh salt.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying hash function fails.
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Mismatch`] when the password is wrong and
    /// [`CredentialError::Malformed`] when the stored hash cannot be parsed.
    fn verify(&self, hashed: &str, plaintext: &str) -> Result<(), CredentialError>;
}

#[derive(Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// # Errors
    ///
    /// Returns [`CredentialError::UnsupportedCost`] when `cost` is outside 4..=31.
    pub fn new(cost: u32) -> Result<Self, CredentialError> {
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&cost) {
            return Err(CredentialError::UnsupportedCost(cost));
        }

        Ok(Self { cost })
    }
}

impl fmt::Debug for BcryptHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BcryptHasher")
            .field("cost", &self.cost)
            .finish()
    }
}

impl CredentialHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        bcrypt::non_truncating_hash(plaintext, self.cost).map_err(|source| match source {
            BcryptError::Truncation(_) => CredentialError::TooLong(plaintext.len()),
            other => CredentialError::Hashing(other),
        })
    }

    fn verify(&self, hashed: &str, plaintext: &str) -> Result<(), CredentialError> {
        match bcrypt::non_truncating_verify(plaintext, hashed) {
            Ok(true) => Ok(()),
            // No stored hash can come from an input bcrypt would have truncated.
            Ok(false) | Err(BcryptError::Truncation(_)) => Err(CredentialError::Mismatch),
            Err(source) => Err(CredentialError::Malformed(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn hasher() -> Result<BcryptHasher, CredentialError> {
        BcryptHasher::new(MIN_HASH_COST)
    }

    #[test]
    fn hash_then_verify_accepts_the_same_password() -> TestResult {
        let hasher = hasher()?;
        let hashed = hasher.hash("Secret1!")?;

        hasher.verify(&hashed, "Secret1!")?;

        Ok(())
    }

    #[test]
    fn verify_rejects_a_different_password() -> TestResult {
        let hasher = hasher()?;
        let hashed = hasher.hash("Secret1!")?;

        let result = hasher.verify(&hashed, "Secret2!");

        assert!(matches!(result, Err(CredentialError::Mismatch)));

        Ok(())
    }

    #[test]
    fn hashing_is_salted() -> TestResult {
        let hasher = hasher()?;

        let first = hasher.hash("Secret1!")?;
        let second = hasher.hash("Secret1!")?;

        assert_ne!(first, second, "two hashes of one password should differ");
        assert!(!first.contains("Secret1!"));

        Ok(())
    }

    #[test]
    fn long_multibyte_password_is_refused_not_truncated() -> TestResult {
        let hasher = hasher()?;
        let password = format!("A1!{}", "é".repeat(61));

        assert_eq!(password.chars().count(), 64);

        let result = hasher.hash(&password);

        assert!(
            matches!(result, Err(CredentialError::TooLong(125))),
            "unexpected result: {result:?}"
        );

        Ok(())
    }

    #[test]
    fn verify_rejects_password_extending_a_full_length_one() -> TestResult {
        let hasher = hasher()?;
        let password = format!("A1!{}", "x".repeat(MAX_PASSWORD_BYTES - 3));
        let hashed = hasher.hash(&password)?;

        hasher.verify(&hashed, &password)?;

        let result = hasher.verify(&hashed, &format!("{password}x"));

        assert!(matches!(result, Err(CredentialError::Mismatch)));

        Ok(())
    }

    #[test]
    fn hash_encodes_configured_cost() -> TestResult {
        let hashed = hasher()?.hash("Secret1!")?;

        assert!(hashed.starts_with("$2b$04$"), "unexpected hash prefix: {hashed}");

        Ok(())
    }

    #[test]
    fn verify_reports_malformed_hash() -> TestResult {
        let result = hasher()?.verify("not-a-bcrypt-hash", "Secret1!");

        assert!(matches!(result, Err(CredentialError::Malformed(_))));

        Ok(())
    }

    #[test]
    fn new_rejects_out_of_range_cost() {
        assert!(matches!(
            BcryptHasher::new(3),
            Err(CredentialError::UnsupportedCost(3))
        ));
        assert!(matches!(
            BcryptHasher::new(32),
            Err(CredentialError::UnsupportedCost(32))
        ));
        assert!(BcryptHasher::new(DEFAULT_HASH_COST).is_ok());
    }
}
