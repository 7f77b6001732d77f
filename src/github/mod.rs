//! GitHub REST API access.
//!
//! - `client`: the HTTP client and fetch operations
//! - `payload`: wire-format structs for API responses

mod client;
mod payload;

pub use client::{FetchError, GithubClient, SharedClient};
pub use payload::{CommitRecord, ContributorRecord};
