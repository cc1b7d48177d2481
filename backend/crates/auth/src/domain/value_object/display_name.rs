//! Display Name Value Object
//!
//! Free-form name shown back to the user. Not an identifier, so it is
//! neither unique nor case-folded.
//!
//! ## Invariants
//! - NFKC normalized, surrounding whitespace trimmed
//! - 1 to [`DISPLAY_NAME_MAX_LENGTH`] characters
//! - No control characters

use std::fmt;
use unicode_normalization::UnicodeNormalization;

use crate::error::{AuthError, AuthResult};

pub const DISPLAY_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(raw: &str) -> AuthResult<Self> {
        let normalized: String = raw.nfkc().collect();
        let name = normalized.trim();

        if name.is_empty() {
            return Err(AuthError::validation("Name is required"));
        }

        let len = name.chars().count();
        if len > DISPLAY_NAME_MAX_LENGTH {
            return Err(AuthError::validation(format!(
                "Name must be at most {DISPLAY_NAME_MAX_LENGTH} characters (got {len})"
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(AuthError::validation("Name contains invalid characters"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn from_db(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
