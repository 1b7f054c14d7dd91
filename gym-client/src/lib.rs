//! Gym Client - API client and member store for the gym admin dashboard
//!
//! Talks to the gym REST API over HTTP and keeps the dashboard's member
//! list, request state and UI state consistent with confirmed responses.

pub mod activity;
pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod http;
pub mod logger;
pub mod store;
pub mod tracker;

pub use activity::{ActivityAction, RecentActivity};
pub use api::{GymApiClient, MemberApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, user_message};
pub use http::HttpClient;
pub use store::{MemberStore, Section, StoreError};
pub use tracker::{RequestState, RequestTracker};

// Re-export shared types for convenience
pub use shared::models::{Member, MemberFormData, MembershipStatus, MembershipType};
pub use shared::stats::DashboardStats;
