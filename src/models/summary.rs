//! Analysis result DTOs.
//!
//! - `CommitActivity`: date→count histogram for charting, dates ascending
//! - `ContributorBreakdown`: ranked contributor shares plus bus factor
//! - `CommitCheck`: how many commits one page of the listing returned

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitActivity {
    /// Calendar dates with at least one commit, ascending, no duplicates.
    pub dates: Vec<NaiveDate>,
    /// Commit count per entry in `dates`.
    pub counts: Vec<u64>,
    /// Number of commits that carried a parseable timestamp; always equals
    /// the sum of `counts`.
    pub total_commits: u64,
}

impl CommitActivity {
    pub fn empty() -> Self {
        Self {
            dates: Vec::new(),
            counts: Vec::new(),
            total_commits: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorShare {
    pub login: String,
    pub contributions: u64,
    /// Share of total contributions, full precision.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorBreakdown {
    /// Contributors sorted by contribution count, descending.
    pub contributors: Vec<ContributorShare>,
    pub total_contributions: u64,
    /// Top contributor's share, rounded to two decimal places.
    pub top_contributor_percentage: f64,
    /// Minimum number of top contributors whose cumulative share first
    /// reaches 50% of all contributions.
    pub bus_factor: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitCheck {
    pub owner: String,
    pub repo: String,
    pub commit_count: usize,
}
