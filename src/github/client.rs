//! GitHub API client.
//!
//! One `reqwest::Client` with default headers (API media type, user agent,
//! optional token) shared across all requests. Every outbound call is bounded
//! by the configured timeout, and every failure is classified into a
//! `FetchError` cause instead of surfacing a raw transport error. The same
//! classification applies to the commits, contributors, and rate-limit paths.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::RateLimitStatus;
use super::payload::{CommitRecord, ContributorRecord, RateLimitBody};

/// GitHub caps `per_page` at 100 for the commit listing endpoint.
pub const MAX_PAGE_SIZE: u32 = 100;

const USER_AGENT: &str = concat!("repo-health/", env!("CARGO_PKG_VERSION"));

/// Classified cause of a failed GitHub request.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    #[error("GitHub responded with status {0}")]
    Status(StatusCode),

    #[error("request to GitHub timed out")]
    Timeout,

    #[error("could not connect to GitHub: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("unexpected response body from GitHub: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("request to GitHub failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connect(err)
        } else if err.is_decode() {
            FetchError::Decode(err)
        } else {
            FetchError::Transport(err)
        }
    }
}

pub struct GithubClient {
    client: Client,
    api_url: String,
    token_configured: bool,
}

pub type SharedClient = Arc<GithubClient>;

impl GithubClient {
    /// Build a client for the given API base URL.
    ///
    /// The token is read once here and baked into the default headers;
    /// nothing else reads the environment at request time.
    pub fn new(
        api_url: impl Into<String>,
        token: Option<&SecretString>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        if let Some(token) = token {
            let mut value =
                HeaderValue::from_str(&format!("token {}", token.expose_secret()))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = ClientBuilder::new()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            token_configured: token.is_some(),
        })
    }

    /// Whether an API token was configured at startup.
    pub fn token_configured(&self) -> bool {
        self.token_configured
    }

    /// Fetch one page of commits for a repository, newest first.
    /// `per_page` is clamped to 1..=100.
    pub async fn fetch_commits(
        &self,
        owner: &str,
        repo: &str,
        per_page: u32,
    ) -> Result<Vec<CommitRecord>, FetchError> {
        let url = format!("{}/repos/{}/{}/commits", self.api_url, owner, repo);
        let per_page = per_page.clamp(1, MAX_PAGE_SIZE);
        let response = self
            .client
            .get(url)
            .query(&[("per_page", per_page.to_string())])
            .send()
            .await?;
        read_json(response).await
    }

    /// Fetch the contributor list for a repository, ordered by contributions
    /// descending as GitHub returns it.
    pub async fn fetch_contributors(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<ContributorRecord>, FetchError> {
        let url = format!("{}/repos/{}/{}/contributors", self.api_url, owner, repo);
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    /// Current core rate-limit status for the configured credentials.
    pub async fn fetch_rate_limit(&self) -> Result<RateLimitStatus, FetchError> {
        let url = format!("{}/rate_limit", self.api_url);
        let response = self.client.get(url).send().await?;
        let body: RateLimitBody = read_json(response).await?;
        let core = body.resources.core;
        Ok(RateLimitStatus {
            limit: core.limit,
            remaining: core.remaining,
            reset_at: core.reset,
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let response = check_status(response).await?;
    Ok(response.json::<T>().await?)
}

/// Classify non-2xx responses. GitHub signals an exhausted rate limit as a
/// 403 (or 429) whose body mentions the limit, so those are told apart from
/// ordinary rejections.
async fn check_status(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
        let body = response.text().await.unwrap_or_default();
        if body.to_lowercase().contains("rate limit") {
            return Err(FetchError::RateLimited);
        }
    }
    Err(FetchError::Status(status))
}
