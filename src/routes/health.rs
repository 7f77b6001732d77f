//! Health endpoint.
//!
//! GET /health
//!
//! Echoes the GitHub core rate-limit status and whether an API token is
//! configured. A failed rate-limit probe degrades to `rate_limit: null`
//! instead of failing the health check; the service itself is still up.

use axum::{Json, Router, extract::State, routing::get};
use tracing::warn;

use crate::github::SharedClient;
use crate::models::HealthStatus;

pub fn routes(client: SharedClient) -> Router {
    Router::new()
        .route("/health", get(get_health))
        .with_state(client)
}

async fn get_health(State(client): State<SharedClient>) -> Json<HealthStatus> {
    let rate_limit = match client.fetch_rate_limit().await {
        Ok(status) => Some(status),
        Err(err) => {
            warn!("rate-limit probe failed: {}", err);
            None
        }
    };

    Json(HealthStatus {
        status: "ok".to_string(),
        token_configured: client.token_configured(),
        rate_limit,
    })
}
