//! User Entity
//!
//! The credential record: who the user is and how to check their password.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_id::UserId, user_password::UserPassword,
};

/// User entity
///
/// Created on registration and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier, used as the token subject
    pub user_id: UserId,
    /// Display name
    pub name: DisplayName,
    /// Login identifier (unique, lower-cased)
    pub email: Email,
    /// Argon2id PHC string
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: DisplayName, email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
