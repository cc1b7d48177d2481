//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName,
    email::Email,
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        if [&input.name, &input.email, &input.password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(AuthError::validation("Name, email and password are required"));
        }

        let name = DisplayName::new(&input.name)?;
        let email = Email::new(&input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let config = Arc::clone(&self.config);
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, config.pepper())
        })
        .await??;

        let user = User::new(name, email, password_hash);

        // A concurrent registration may have won since the lookup;
        // the store reports that as EmailTaken.
        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use platform::token::SigningKey;

    use super::*;
    use crate::infra::memory::InMemoryUserRepository;

    fn use_case() -> (RegisterUseCase<InMemoryUserRepository>, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::new(SigningKey::generate()));
        (RegisterUseCase::new(Arc::clone(&repo), config), repo)
    }

    fn input(name: &str, email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_creates_user() {
        let (use_case, repo) = use_case();

        let output = use_case
            .execute(input("Jane", "jane@x.com", "secret1"))
            .await
            .unwrap();

        let stored = repo
            .find_by_email(&Email::new("jane@x.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.user_id, output.user_id);
        assert_eq!(stored.name.as_str(), "Jane");
        assert_ne!(stored.password_hash.as_phc_string(), "secret1");
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let (use_case, repo) = use_case();

        for (name, email, password) in [
            ("", "jane@x.com", "secret1"),
            ("Jane", "", "secret1"),
            ("Jane", "jane@x.com", ""),
            ("  ", "jane@x.com", "secret1"),
        ] {
            let result = use_case.execute(input(name, email, password)).await;
            assert!(matches!(result, Err(AuthError::Validation(_))));
        }
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_invalid_email() {
        let (use_case, _) = use_case();
        let result = use_case.execute(input("Jane", "not-an-email", "secret1")).await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let (use_case, repo) = use_case();

        use_case
            .execute(input("Jane", "jane@x.com", "secret1"))
            .await
            .unwrap();
        let result = use_case
            .execute(input("Other Jane", "JANE@x.com", "different"))
            .await;

        assert!(matches!(result, Err(AuthError::EmailTaken)));
        assert_eq!(repo.len().await, 1);
    }
}
