//! Domain Layer
//!
//! Contains entities, value objects, repository traits and the access policy.

pub mod access;
pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use access::{GuardDecision, RouteClass};
pub use entity::user::User;
pub use repository::UserRepository;
