//! GitHub repository health analyzer backend.
//!
//! Fetches commit and contributor data for a public GitHub repository and
//! serves two derived metrics over HTTP: a daily commit-count time series
//! and a contributor concentration ("bus factor") summary.

pub mod analysis;
pub mod error;
pub mod github;
pub mod models;
pub mod routes;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use github::{GithubClient, SharedClient};

/// Build the full application router with CORS and request tracing.
pub fn app(client: SharedClient) -> Router {
    // Permissive CORS so a separately-served frontend can call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::create_router(client)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
