//! Shared types for the gym admin client
//!
//! Wire models exchanged with the gym API, date helpers and the
//! dashboard statistics derived from a member list.

pub mod models;
pub mod stats;
pub mod util;

// Re-exports
pub use models::{Member, MemberFormData, MembershipStatus, MembershipType};
pub use serde::{Deserialize, Serialize};
pub use stats::DashboardStats;
