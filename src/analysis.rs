//! Aggregation of raw GitHub records into summary metrics.
//!
//! Pure functions over already-fetched data; no I/O. `summarize_commits`
//! builds the daily commit histogram, `summarize_contributors` ranks
//! contributors and computes the bus factor.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};

use crate::github::{CommitRecord, ContributorRecord};
use crate::models::{CommitActivity, ContributorBreakdown, ContributorShare};

/// Cumulative contribution share at which the bus factor is reached.
const BUS_FACTOR_THRESHOLD: f64 = 50.0;

/// Group commits by author date into an ascending daily histogram.
///
/// Records with a missing or unparseable `commit.author.date` are skipped;
/// they count toward neither the histogram nor `total_commits`. Empty or
/// all-unparseable input yields an empty summary.
pub fn summarize_commits(commits: &[CommitRecord]) -> CommitActivity {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for record in commits {
        let Some(raw) = record.author_date() else {
            continue;
        };
        let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) else {
            continue;
        };
        // Calendar date in the timestamp's own offset; time of day dropped.
        *per_day.entry(timestamp.date_naive()).or_insert(0) += 1;
    }

    let total_commits = per_day.values().sum();
    let (dates, counts) = per_day.into_iter().unzip();

    CommitActivity {
        dates,
        counts,
        total_commits,
    }
}

/// Rank contributors by contribution count and compute concentration metrics.
///
/// Each contributor's percentage of the total is kept at full precision; only
/// the top-contributor scalar is rounded to two decimal places. The bus
/// factor walks the ranking in descending order and counts contributors until
/// their cumulative share first reaches 50%.
///
/// A zero contribution total (including an empty list) yields all-zero
/// percentages and a bus factor equal to the number of contributors, since no
/// subset of them can reach half of the total.
pub fn summarize_contributors(mut records: Vec<ContributorRecord>) -> ContributorBreakdown {
    records.sort_by(|a, b| b.contributions.cmp(&a.contributions));

    let total_contributions: u64 = records.iter().map(|c| c.contributions).sum();

    let contributors: Vec<ContributorShare> = records
        .into_iter()
        .map(|record| {
            let percentage = if total_contributions == 0 {
                0.0
            } else {
                record.contributions as f64 / total_contributions as f64 * 100.0
            };
            ContributorShare {
                login: record.login,
                contributions: record.contributions,
                percentage,
            }
        })
        .collect();

    let top_contributor_percentage = contributors
        .first()
        .map(|top| round2(top.percentage))
        .unwrap_or(0.0);

    let mut cumulative = 0.0;
    let mut bus_factor = 0;
    for share in &contributors {
        bus_factor += 1;
        cumulative += share.percentage;
        if cumulative >= BUS_FACTOR_THRESHOLD {
            break;
        }
    }

    ContributorBreakdown {
        contributors,
        total_contributions,
        top_contributor_percentage,
        bus_factor,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
