//! Data transfer objects (DTOs) for API responses.
//!
//! These structs are serialized to JSON for frontend consumption.
//! - `summary`: CommitActivity, ContributorBreakdown, CommitCheck
//! - `health`: ServiceStatus, HealthStatus, RateLimitStatus

pub mod health;
pub mod summary;

pub use health::*;
pub use summary::*;
