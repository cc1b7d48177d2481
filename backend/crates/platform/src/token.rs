//! Signed Token Envelope
//!
//! A token is `base64url(payload) "." base64url(HMAC-SHA256(key, encoded_payload))`.
//! The payload is opaque bytes here; callers put their claims in it.
//! Nothing is encrypted, so payloads must not carry secrets.

use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{from_base64url, hmac_sha256, random_bytes, to_base64url, verify_hmac_sha256};

/// Length of the signing key in bytes
pub const SIGNING_KEY_LEN: usize = 32;

/// Reasons a token fails to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not two base64url segments separated by a dot
    #[error("token is malformed")]
    Malformed,

    /// Well-formed but the signature does not match
    #[error("token signature is invalid")]
    BadSignature,
}

/// Signing key parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SigningKeyError {
    #[error("signing key is not valid base64")]
    Encoding,

    #[error("signing key must be {expected} bytes (got {actual})")]
    Length { expected: usize, actual: usize },
}

/// Process-wide HMAC key
///
/// Zeroized on drop. `Debug` never prints the bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey([u8; SIGNING_KEY_LEN]);

impl SigningKey {
    pub fn new(bytes: [u8; SIGNING_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Random key from the OS CSPRNG
    pub fn generate() -> Self {
        let mut bytes = [0u8; SIGNING_KEY_LEN];
        bytes.copy_from_slice(&random_bytes(SIGNING_KEY_LEN));
        Self(bytes)
    }

    /// Parse a standard base64 encoded key (as stored in environment variables)
    pub fn from_base64(encoded: &str) -> Result<Self, SigningKeyError> {
        let mut decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| SigningKeyError::Encoding)?;

        if decoded.len() != SIGNING_KEY_LEN {
            let actual = decoded.len();
            decoded.zeroize();
            return Err(SigningKeyError::Length {
                expected: SIGNING_KEY_LEN,
                actual,
            });
        }

        let mut bytes = [0u8; SIGNING_KEY_LEN];
        bytes.copy_from_slice(&decoded);
        decoded.zeroize();
        Ok(Self(bytes))
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningKey").field(&"[REDACTED]").finish()
    }
}

/// Sign `payload` and return the compact token string
pub fn seal(key: &SigningKey, payload: &[u8]) -> String {
    let encoded = to_base64url(payload);
    let tag = hmac_sha256(key.as_bytes(), encoded.as_bytes());
    format!("{}.{}", encoded, to_base64url(&tag))
}

/// Check the signature and return the payload bytes
pub fn open(key: &SigningKey, token: &str) -> Result<Vec<u8>, TokenError> {
    let (encoded, signature) = token.split_once('.').ok_or(TokenError::Malformed)?;
    if encoded.is_empty() || signature.is_empty() || signature.contains('.') {
        return Err(TokenError::Malformed);
    }

    let tag = from_base64url(signature).map_err(|_| TokenError::Malformed)?;

    if !verify_hmac_sha256(key.as_bytes(), encoded.as_bytes(), &tag) {
        return Err(TokenError::BadSignature);
    }

    from_base64url(encoded).map_err(|_| TokenError::Malformed)
}
