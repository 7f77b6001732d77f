//! Commit analysis endpoints.
//!
//! - GET /commits/{owner}/{repo}?per_page=
//!   Daily commit histogram for one page of the repository's history.
//!
//! - GET /commits/{owner}/{repo}/check?per_page=
//!   Commit-count check: how many records one page of the listing returned.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::analysis::summarize_commits;
use crate::error::{AppError, Result};
use crate::github::SharedClient;
use crate::models::{CommitActivity, CommitCheck};

pub fn routes(client: SharedClient) -> Router {
    Router::new()
        .route("/commits/{owner}/{repo}", get(get_commit_activity))
        .route("/commits/{owner}/{repo}/check", get(check_commits))
        .with_state(client)
}

#[derive(Debug, Deserialize)]
struct CommitsQuery {
    #[serde(default = "default_per_page")]
    per_page: u32,
}

fn default_per_page() -> u32 {
    100
}

async fn get_commit_activity(
    State(client): State<SharedClient>,
    Path((owner, repo)): Path<(String, String)>,
    Query(query): Query<CommitsQuery>,
) -> Result<Json<CommitActivity>> {
    let commits = client
        .fetch_commits(&owner, &repo, query.per_page)
        .await
        .map_err(|err| AppError::upstream(&owner, &repo, err))?;

    Ok(Json(summarize_commits(&commits)))
}

async fn check_commits(
    State(client): State<SharedClient>,
    Path((owner, repo)): Path<(String, String)>,
    Query(query): Query<CommitsQuery>,
) -> Result<Json<CommitCheck>> {
    let commits = client
        .fetch_commits(&owner, &repo, query.per_page)
        .await
        .map_err(|err| AppError::upstream(&owner, &repo, err))?;

    Ok(Json(CommitCheck {
        owner,
        repo,
        commit_count: commits.len(),
    }))
}
