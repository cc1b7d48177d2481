//! Login Use Case
//!
//! Checks credentials and issues a session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::application::session_token::SessionTokenIssuer;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Session token for the cookie
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user_id: UserId,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: SessionTokenIssuer,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        let tokens = SessionTokenIssuer::new(Arc::clone(&config));
        Self {
            user_repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::validation("Email and password are required"));
        }

        let email = Email::new(&input.email)?;
        // Out-of-policy input can match no stored hash.
        let raw_password = RawPassword::new(input.password).ok();

        let user = self.user_repo.find_by_email(&email).await?;

        let password_valid = match raw_password {
            Some(raw_password) => {
                let config = Arc::clone(&self.config);
                let password_hash = user.as_ref().map(|u| u.password_hash.clone());
                tokio::task::spawn_blocking(move || {
                    UserPassword::verify_or_decoy(
                        password_hash.as_ref(),
                        &raw_password,
                        config.pepper(),
                    )
                })
                .await?
            }
            None => false,
        };

        let Some(user) = user else {
            return Err(if self.config.reveal_unknown_user {
                AuthError::UserNotFound
            } else {
                AuthError::InvalidCredentials
            });
        };

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.tokens.issue(&user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            token: issued.token,
            expires_at: issued.expires_at,
            user_id: user.user_id,
        })
    }
}
