//! Contributor analysis endpoint.
//!
//! GET /contributors/{owner}/{repo}
//!
//! Returns contributors ranked by contribution count with their percentage
//! shares, the top contributor's share, and the bus factor. Upstream
//! failures map to the same not-found response as the commits endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::analysis::summarize_contributors;
use crate::error::{AppError, Result};
use crate::github::SharedClient;
use crate::models::ContributorBreakdown;

pub fn routes(client: SharedClient) -> Router {
    Router::new()
        .route("/contributors/{owner}/{repo}", get(get_contributor_breakdown))
        .with_state(client)
}

async fn get_contributor_breakdown(
    State(client): State<SharedClient>,
    Path((owner, repo)): Path<(String, String)>,
) -> Result<Json<ContributorBreakdown>> {
    let contributors = client
        .fetch_contributors(&owner, &repo)
        .await
        .map_err(|err| AppError::upstream(&owner, &repo, err))?;

    Ok(Json(summarize_contributors(contributors)))
}
