//! API route handlers - maps HTTP endpoints to fetch + analysis operations.
//!
//! Each submodule defines routes for a feature area:
//! - `status`: Service liveness (GET /)
//! - `health`: Rate-limit status and token configuration (GET /health)
//! - `commits`: Daily commit analysis and commit-count check
//! - `contributors`: Contributor shares and bus factor

pub mod commits;
pub mod contributors;
pub mod health;
pub mod status;

use axum::Router;

use crate::github::SharedClient;

pub fn create_router(client: SharedClient) -> Router {
    Router::new()
        .merge(status::routes())
        .merge(health::routes(client.clone()))
        .merge(commits::routes(client.clone()))
        .merge(contributors::routes(client))
}
