//! Wire-format structs for GitHub API responses.
//!
//! `CommitRecord` is deliberately loose: the commit listing endpoint can
//! return entries with a null `author` or missing fields, and a single bad
//! record must not fail the whole batch. Every level of the nesting is
//! optional; downstream analysis skips records it cannot read a date from.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CommitRecord {
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub commit: Option<CommitMeta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitMeta {
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    #[serde(default)]
    pub date: Option<String>,
}

impl CommitRecord {
    /// The author timestamp nested under `commit.author.date`, if present.
    pub fn author_date(&self) -> Option<&str> {
        self.commit.as_ref()?.author.as_ref()?.date.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContributorRecord {
    pub login: String,
    pub contributions: u64,
}

#[derive(Debug, Deserialize)]
pub struct RateLimitBody {
    pub resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
pub struct RateLimitResources {
    pub core: RateLimitResource,
}

#[derive(Debug, Deserialize)]
pub struct RateLimitResource {
    pub limit: u64,
    pub remaining: u64,
    pub reset: i64,
}
