//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` for all error conditions and implements Axum's
//! `IntoResponse` to convert errors to HTTP responses with JSON error bodies.
//!
//! Error mappings:
//! - `Upstream` (GitHub unreachable, rejected, or rate-limited) → 404
//! - `Internal` → 500

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::github::FetchError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Repository {repo} is unavailable: {source}")]
    Upstream {
        repo: String,
        #[source]
        source: FetchError,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Failure to fetch data for `owner/repo` from GitHub, whatever the cause.
    pub fn upstream(owner: &str, repo: &str, source: FetchError) -> Self {
        AppError::Upstream {
            repo: format!("{}/{}", owner, repo),
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Upstream { repo, source } => (
                StatusCode::NOT_FOUND,
                format!("Repository {} is unavailable: {}", repo, source),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
