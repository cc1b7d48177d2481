//! Check Session Use Case
//!
//! Verifies a session token and loads the user it belongs to.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::application::session_token::SessionTokenIssuer;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Session info output
#[derive(Debug)]
pub struct SessionInfoOutput {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

/// Check session use case
pub struct CheckSessionUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    tokens: SessionTokenIssuer,
}

impl<R> CheckSessionUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens: SessionTokenIssuer::new(config),
        }
    }

    /// Check if session is valid and return session info
    ///
    /// A token whose user no longer exists is invalid.
    pub async fn execute(&self, token: &str) -> AuthResult<SessionInfoOutput> {
        let session = self.tokens.verify(token)?;

        let user = self
            .user_repo
            .find_by_id(&session.user_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        Ok(SessionInfoOutput {
            user_id: user.user_id,
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            expires_at: session.expires_at,
        })
    }
}
