//! Password Hashing and Verification
//!
//! - Argon2id with fixed cost parameters
//! - PHC string output (algorithm, version, params and salt are embedded)
//! - Constant-time verification that fails closed on malformed hashes
//! - Zeroization of clear text on drop
//! - Optional application-wide pepper
//! - A decoy hash so a lookup miss costs the same as a wrong password

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Upper bound on password length, in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Argon2 memory cost in KiB (19 MiB)
pub const ARGON2_MEMORY_KIB: u32 = 19_456;

/// Argon2 iterations
pub const ARGON2_ITERATIONS: u32 = 2;

/// Argon2 lanes
pub const ARGON2_PARALLELISM: u32 = 1;

/// Password policy violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password cannot be empty")]
    EmptyOrWhitespace,

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Hashing failures
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

/// Argon2id hash of no real password, with the production cost parameters
const DECOY_PHC: &str = "$argon2id$v=19$m=19456,t=2,p=1$Y0ea1poJCyWCd+yPum+ZQQ$veuboir4+nPln+fE08SK4RZWF912xyB3PN9svDOpHdc";

/// Clear text password
///
/// NFKC normalized at construction so that visually identical input hashes
/// identically. Zeroized on drop, not `Clone`, redacted in `Debug`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let raw = Zeroizing::new(raw);
        let normalized: String = raw.nfkc().collect();
        // Wrap first so the normalized copy is wiped on every return path.
        let password = Self(normalized);

        if password.0.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = password.0.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        Ok(password)
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(self.0.as_bytes().to_vec());
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        bytes
    }

    /// Hash with Argon2id and a fresh random salt, returning the PHC string
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<String, PasswordHashError> {
        let password_bytes = self.peppered(pepper);
        let salt = SaltString::generate(&mut OsRng);

        let hash = hasher()?
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(hash.to_string())
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

fn hasher() -> Result<Argon2<'static>, PasswordHashError> {
    let params = Params::new(
        ARGON2_MEMORY_KIB,
        ARGON2_ITERATIONS,
        ARGON2_PARALLELISM,
        None,
    )
    .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Verify against a raw PHC string; never errors
pub fn verify_phc(phc: &str, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(phc) else {
        return false;
    };

    let password_bytes = password.peppered(pepper);

    // Argon2 compares the output in constant time.
    Argon2::default()
        .verify_password(&password_bytes, &parsed_hash)
        .is_ok()
}

/// Verify against `phc`, or burn the same Argon2 work when there is none
///
/// Always `false` without a stored hash.
pub fn verify_phc_or_decoy(
    phc: Option<&str>,
    password: &ClearTextPassword,
    pepper: Option<&[u8]>,
) -> bool {
    match phc {
        Some(phc) => verify_phc(phc, password, pepper),
        None => {
            let _ = verify_phc(DECOY_PHC, password, pepper);
            false
        }
    }
}
