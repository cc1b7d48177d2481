//! Access Policy
//!
//! Which guarded page may be reached in which authentication state.
//! Pure; the HTTP middleware does the cookie and token work and asks
//! [`decide`] what to do.

/// Where authenticated users land when they hit a public-only page
pub const LANDING_PATH: &str = "/profile";

/// Where unauthenticated users are sent from a protected page
pub const LOGIN_PATH: &str = "/login";

/// Guarded routes by class
pub const PUBLIC_PATHS: &[&str] = &["/register", "/login"];
pub const PROTECTED_PATHS: &[&str] = &["/", "/profile"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Only meaningful without a session (login, register)
    Public,
    /// Requires a session
    Protected,
}

impl RouteClass {
    /// Classify a request path. `None` for paths the guard does not cover.
    ///
    /// A single trailing slash is ignored, so `/profile/` is still protected.
    pub fn classify(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };

        if PROTECTED_PATHS.contains(&path) {
            Some(RouteClass::Protected)
        } else if PUBLIC_PATHS.contains(&path) {
            Some(RouteClass::Public)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectTo(&'static str),
}

pub fn decide(class: RouteClass, authenticated: bool) -> GuardDecision {
    match (class, authenticated) {
        (RouteClass::Public, true) => GuardDecision::RedirectTo(LANDING_PATH),
        (RouteClass::Public, false) => GuardDecision::Allow,
        (RouteClass::Protected, true) => GuardDecision::Allow,
        (RouteClass::Protected, false) => GuardDecision::RedirectTo(LOGIN_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(RouteClass::classify("/"), Some(RouteClass::Protected));
        assert_eq!(RouteClass::classify("/profile"), Some(RouteClass::Protected));
        assert_eq!(RouteClass::classify("/profile/"), Some(RouteClass::Protected));
        assert_eq!(RouteClass::classify("/login"), Some(RouteClass::Public));
        assert_eq!(RouteClass::classify("/register"), Some(RouteClass::Public));
    }

    #[test]
    fn test_unguarded_paths() {
        assert_eq!(RouteClass::classify("/api/auth/login"), None);
        assert_eq!(RouteClass::classify("/profiles"), None);
        assert_eq!(RouteClass::classify("/favicon.ico"), None);
        assert_eq!(RouteClass::classify(""), None);
    }

    #[test]
    fn test_route_sets_are_disjoint() {
        for path in PUBLIC_PATHS {
            assert!(!PROTECTED_PATHS.contains(path));
        }
    }

    #[test]
    fn test_decision_table() {
        assert_eq!(
            decide(RouteClass::Public, true),
            GuardDecision::RedirectTo("/profile")
        );
        assert_eq!(decide(RouteClass::Public, false), GuardDecision::Allow);
        assert_eq!(decide(RouteClass::Protected, true), GuardDecision::Allow);
        assert_eq!(
            decide(RouteClass::Protected, false),
            GuardDecision::RedirectTo("/login")
        );
    }
}
