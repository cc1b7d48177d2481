//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    response::Html,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AccessGuardState, access_guard};

/// Create the Auth API router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth API router for any repository implementation
///
/// Routes are relative; mount with `.nest("/api/auth", ...)`.
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route(
            "/logout",
            get(handlers::logout::<R>).post(handlers::logout::<R>),
        )
        .route("/status", get(handlers::session_status::<R>))
        .with_state(state)
}

/// Page routes behind the access guard
///
/// Bodies are placeholders; the frontend owns the markup.
pub fn page_router(config: Arc<AuthConfig>) -> Router {
    let guard = AccessGuardState::new(config);

    Router::new()
        .route("/", get(|| page("Home")))
        .route("/profile", get(|| page("Profile")))
        .route("/login", get(|| page("Login")))
        .route("/register", get(|| page("Register")))
        .route_layer(from_fn_with_state(guard, access_guard))
}

/// API under `/api/auth` plus the guarded pages
pub fn app_router<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .nest("/api/auth", auth_router_generic(repo, Arc::clone(&config)))
        .merge(page_router(config))
}

async fn page(title: &'static str) -> Html<String> {
    Html(format!(
        "<!doctype html><html><head><title>{title}</title></head><body><h1>{title}</h1></body></html>"
    ))
}
