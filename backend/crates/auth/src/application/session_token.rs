//! Session Tokens
//!
//! Stateless session tokens: `{sub, iat, exp}` claims sealed with the
//! configured HMAC key (see `platform::token`). Nothing is stored
//! server-side, so a token stays valid until it expires.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::token::{self, TokenError};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID
    pub sub: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

/// A freshly issued token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// A token that passed verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSession {
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

/// Why a token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Malformed,
    BadSignature,
    Expired,
}

impl Rejection {
    fn as_str(&self) -> &'static str {
        match self {
            Rejection::Malformed => "malformed",
            Rejection::BadSignature => "bad_signature",
            Rejection::Expired => "expired",
        }
    }
}

impl From<TokenError> for Rejection {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Malformed => Rejection::Malformed,
            TokenError::BadSignature => Rejection::BadSignature,
        }
    }
}

/// Issues and verifies session tokens
#[derive(Debug, Clone)]
pub struct SessionTokenIssuer {
    config: Arc<AuthConfig>,
}

impl SessionTokenIssuer {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a token for `user_id`, valid for the configured TTL
    pub fn issue(&self, user_id: &UserId) -> AuthResult<IssuedToken> {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    /// Verify signature and expiry and return the subject
    pub fn verify(&self, token: &str) -> AuthResult<VerifiedSession> {
        self.verify_at(token, Utc::now().timestamp()).map_err(|reason| {
            tracing::debug!(reason = reason.as_str(), "Session token rejected");
            AuthError::SessionInvalid
        })
    }

    fn issue_at(&self, user_id: &UserId, now: i64) -> AuthResult<IssuedToken> {
        let ttl = i64::try_from(self.config.session_ttl_secs())
            .map_err(|_| AuthError::Internal("session ttl out of range".to_string()))?;
        let claims = SessionClaims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + ttl,
        };

        let payload = serde_json::to_vec(&claims)
            .map_err(|e| AuthError::Internal(format!("failed to encode claims: {e}")))?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AuthError::Internal("token expiry out of range".to_string()))?;

        Ok(IssuedToken {
            token: token::seal(&self.config.signing_key, &payload),
            expires_at,
        })
    }

    fn verify_at(&self, token: &str, now: i64) -> Result<VerifiedSession, Rejection> {
        let payload = token::open(&self.config.signing_key, token)?;
        let claims: SessionClaims =
            serde_json::from_slice(&payload).map_err(|_| Rejection::Malformed)?;

        if now >= claims.exp {
            return Err(Rejection::Expired);
        }

        let user_id: UserId = claims.sub.parse().map_err(|_| Rejection::Malformed)?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(Rejection::Malformed)?;

        Ok(VerifiedSession {
            user_id,
            expires_at,
        })
    }
}
