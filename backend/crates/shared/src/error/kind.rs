//! Error Kind
//!
//! Which HTTP status a failure surfaces as.

use std::fmt;

/// HTTP-facing failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 404
    NotFound,
    /// 500
    InternalServerError,
}

impl ErrorKind {
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
    /// ```
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// Reason phrase, rendered as the problem `title`
    pub const fn title(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }

    /// Detail of a server error never reaches the client.
    pub const fn hides_detail(self) -> bool {
        matches!(self, ErrorKind::InternalServerError)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_title() {
        let table = [
            (ErrorKind::BadRequest, 400, "Bad Request"),
            (ErrorKind::Unauthorized, 401, "Unauthorized"),
            (ErrorKind::NotFound, 404, "Not Found"),
            (ErrorKind::InternalServerError, 500, "Internal Server Error"),
        ];
        for (kind, status, title) in table {
            assert_eq!(kind.status_code(), status);
            assert_eq!(kind.to_string(), title);
        }
    }

    #[test]
    fn test_only_server_errors_hide_detail() {
        assert!(ErrorKind::InternalServerError.hides_detail());
        assert!(!ErrorKind::NotFound.hides_detail());
    }
}
