//! Shared Kernel
//!
//! Vocabulary shared by every backend crate:
//! - [`error`]: the wire-level error type and its HTTP classification
//! - [`id`]: typed UUID identifiers
//!
//! Nothing domain specific lives here.

pub mod error {
    pub mod app_error;
    pub mod kind;
}
pub mod id;
