//! Platform Crate - Technical Infrastructure
//!
//! Domain-free building blocks used by the auth crate:
//! - Cryptographic helpers (HMAC-SHA256, base64url, CSPRNG)
//! - Password hashing (Argon2id)
//! - Signed token envelope (`payload.signature`)
//! - Cookie parsing and `Set-Cookie` construction

pub mod cookie;
pub mod crypto;
pub mod password;
pub mod token;
