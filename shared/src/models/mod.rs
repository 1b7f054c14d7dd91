//! Data models
//!
//! Shared between the API client and its consumers.
//! All IDs are `i64` (server-assigned).

pub mod member;

// Re-exports
pub use member::*;
