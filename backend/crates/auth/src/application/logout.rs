//! Logout Use Case
//!
//! Tokens are stateless, so there is nothing to delete server-side. The
//! caller clears the cookie; this only records who logged out.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token::SessionTokenIssuer;
use crate::domain::value_object::user_id::UserId;

/// Logout use case
pub struct LogoutUseCase {
    tokens: SessionTokenIssuer,
}

impl LogoutUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            tokens: SessionTokenIssuer::new(config),
        }
    }

    /// Never fails; returns the subject when a valid token was presented
    pub fn execute(&self, token: Option<&str>) -> Option<UserId> {
        let user_id = token
            .and_then(|token| self.tokens.verify(token).ok())
            .map(|session| session.user_id);

        match &user_id {
            Some(user_id) => tracing::info!(user_id = %user_id, "User logged out"),
            None => tracing::debug!("Logout without a valid session"),
        }

        user_id
    }
}

#[cfg(test)]
mod tests {
    use platform::token::SigningKey;

    use super::*;

    #[test]
    fn test_logout_with_and_without_session() {
        let config = Arc::new(AuthConfig::new(SigningKey::generate()));
        let use_case = LogoutUseCase::new(Arc::clone(&config));

        let user_id = UserId::new();
        let issued = SessionTokenIssuer::new(config).issue(&user_id).unwrap();

        assert_eq!(use_case.execute(Some(&issued.token)), Some(user_id));
        assert_eq!(use_case.execute(Some("garbage")), None);
        assert_eq!(use_case.execute(None), None);
    }
}
