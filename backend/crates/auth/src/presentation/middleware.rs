//! Access Guard Middleware
//!
//! Runs in front of the page routes. Reads the session cookie, verifies the
//! token and applies `domain::access::decide`. Never fails: a missing,
//! forged or expired token is treated as no session.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::cookie::extract_cookie;

use crate::application::config::{AuthConfig, SESSION_COOKIE_NAME};
use crate::application::session_token::SessionTokenIssuer;
use crate::domain::access::{GuardDecision, RouteClass, decide};

/// Middleware state
#[derive(Clone)]
pub struct AccessGuardState {
    tokens: SessionTokenIssuer,
}

impl AccessGuardState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            tokens: SessionTokenIssuer::new(config),
        }
    }

    fn is_authenticated(&self, req: &Request<Body>) -> bool {
        extract_cookie(req.headers(), SESSION_COOKIE_NAME)
            .is_some_and(|token| self.tokens.verify(&token).is_ok())
    }
}

/// Allow the request through or redirect it based on session state
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn access_guard(
    State(state): State<AccessGuardState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let Some(class) = RouteClass::classify(req.uri().path()) else {
        return next.run(req).await;
    };

    let authenticated = state.is_authenticated(&req);

    match decide(class, authenticated) {
        GuardDecision::Allow => next.run(req).await,
        GuardDecision::RedirectTo(location) => {
            tracing::debug!(
                path = %req.uri().path(),
                authenticated,
                location,
                "Access guard redirect"
            );
            Redirect::temporary(location).into_response()
        }
    }
}
