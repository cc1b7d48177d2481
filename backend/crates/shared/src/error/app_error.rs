//! Application Error
//!
//! [`AppError`] is what crosses the HTTP boundary. Crate errors such as
//! `auth::AuthError` turn into one right before the response is written,
//! and it renders as an RFC 7807 problem document.

use std::borrow::Cow;
use std::fmt;

use super::kind::ErrorKind;

/// Detail sent in place of a server error's message
pub const INTERNAL_MESSAGE: &str = "Something went wrong";

/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "User not found");
/// assert_eq!(err.status_code(), 404);
/// assert_eq!(err.public_message(), "User not found");
/// ```
#[derive(Debug, Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Message safe to send to a client
    pub fn public_message(&self) -> &str {
        if self.kind.hides_detail() {
            INTERNAL_MESSAGE
        } else {
            &self.message
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let problem = serde_json::json!({
            "type": "about:blank",
            "title": self.kind.title(),
            "status": status.as_u16(),
            "detail": self.public_message(),
        });

        (status, Json(problem)).into_response()
    }
}
