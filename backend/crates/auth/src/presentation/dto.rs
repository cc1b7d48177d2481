//! API DTOs (Data Transfer Objects)
//!
//! Request fields default to empty so a missing field is reported as a
//! validation error rather than a deserialization failure.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Common
// ============================================================================

/// `{"message": ...}` body returned by register, login and logout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// RFC 3339
    pub expires_at: Option<String>,
}

impl SessionStatusResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            user_id: None,
            name: None,
            email: None,
            expires_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: RegisterRequest = serde_json::from_str(r#"{"email":"jane@x.com"}"#).unwrap();
        assert_eq!(req.email, "jane@x.com");
        assert!(req.name.is_empty());
        assert!(req.password.is_empty());
    }

    #[test]
    fn test_status_is_camel_case() {
        let json = serde_json::to_value(SessionStatusResponse {
            authenticated: true,
            user_id: Some("id".into()),
            name: Some("Jane".into()),
            email: Some("jane@x.com".into()),
            expires_at: Some("2026-01-01T00:00:00+00:00".into()),
        })
        .unwrap();

        assert_eq!(json["userId"], "id");
        assert_eq!(json["expiresAt"], "2026-01-01T00:00:00+00:00");
    }
}
