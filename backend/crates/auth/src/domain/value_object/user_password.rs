//! User Password Value Objects
//!
//! [`RawPassword`] is user input; [`UserPassword`] is the stored Argon2id
//! hash. Cryptography is delegated to `platform::password`.
//!
//! Both hashing and verification are CPU heavy on purpose. Callers in async
//! code run them via `tokio::task::spawn_blocking`.

use std::fmt;

use platform::password::{ClearTextPassword, PasswordPolicyError, verify_phc_or_decoy};

use crate::error::{AuthError, AuthResult};

/// Password as typed by the user. Zeroized on drop.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> AuthResult<Self> {
        ClearTextPassword::new(raw).map(Self).map_err(|e| match e {
            PasswordPolicyError::EmptyOrWhitespace => AuthError::validation("Password is required"),
            PasswordPolicyError::TooLong { .. } => AuthError::validation(e.to_string()),
        })
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

/// Stored password hash (PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(String);

impl UserPassword {
    /// Hash a raw password with a fresh salt
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        raw.0
            .hash(pepper)
            .map(Self)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Load from storage without parsing; a corrupt value simply never verifies
    pub fn from_db(phc: String) -> Self {
        Self(phc)
    }

    pub fn as_phc_string(&self) -> &str {
        &self.0
    }

    /// Constant-time verification, `false` for malformed hashes
    ///
    /// With no stored hash (unknown user) the Argon2 work still runs against
    /// a decoy and the result is `false`.
    pub fn verify_or_decoy(
        stored: Option<&Self>,
        raw: &RawPassword,
        pepper: Option<&[u8]>,
    ) -> bool {
        verify_phc_or_decoy(stored.map(Self::as_phc_string), &raw.0, pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> RawPassword {
        RawPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("secret1".to_string()).is_ok());
        assert!(matches!(
            RawPassword::new(String::new()),
            Err(AuthError::Validation(_))
        ));
        assert!(matches!(
            RawPassword::new("x".repeat(500)),
            Err(AuthError::Validation(_))
        ));
    }

    #[test]
    fn test_hash_and_verify() {
        let hashed = UserPassword::from_raw(&raw("secret1"), None).unwrap();
        assert!(UserPassword::verify_or_decoy(Some(&hashed), &raw("secret1"), None));
        assert!(!UserPassword::verify_or_decoy(Some(&hashed), &raw("wrong"), None));
    }

    #[test]
    fn test_never_stores_plaintext() {
        let hashed = UserPassword::from_raw(&raw("secret1"), None).unwrap();
        assert!(!hashed.as_phc_string().contains("secret1"));
    }

    #[test]
    fn test_corrupt_hash_fails_closed() {
        let corrupt = UserPassword::from_db("garbage".to_string());
        assert!(!UserPassword::verify_or_decoy(Some(&corrupt), &raw("garbage"), None));
    }

    #[test]
    fn test_no_stored_hash_never_verifies() {
        assert!(!UserPassword::verify_or_decoy(None, &raw("secret1"), None));
    }

    #[test]
    fn test_debug_redaction() {
        let debug = format!("{:?}", raw("secret1"));
        assert!(!debug.contains("secret1"));

        let hashed = UserPassword::from_raw(&raw("secret1"), None).unwrap();
        assert!(!format!("{hashed:?}").contains("argon2"));
    }
}
