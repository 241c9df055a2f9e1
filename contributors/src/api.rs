use crate::model::{Commit, Identity, Issue, Profile, RepoRef, Repository, TimeWindow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid repository '{0}', expected 'owner/name'")]
    InvalidRepository(String),
    #[error("Aborted: API rate limit below threshold")]
    Aborted,
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Hosting API capability used to collect contributors.
///
/// Pages are numbered from `FIRST_PAGE_NUMBER` and hold at most `MAX_PAGE_SIZE` records.
/// A page shorter than requested is the last one.
#[async_trait]
pub trait Client: Send + Sync {
    const MAX_PAGE_SIZE: u32;
    const FIRST_PAGE_NUMBER: u32;

    /// Remaining requests in the current rate limit window.
    async fn rate_limit_remaining(&self) -> Result<u32>;

    /// Resolves `repo` to the host's canonical repository. Fails if it does not exist.
    async fn repository(&self, repo: &RepoRef) -> Result<Repository>;

    /// Commits inside `window`. Both bounds are inclusive.
    async fn commits(&self, repo: &Repository, window: &TimeWindow, page: u32, per_page: u32) -> Result<Vec<Commit>>;

    /// Closed issues and pull requests, filtered by the host with `since` only.
    async fn closed_issues(
        &self,
        repo: &Repository,
        since: Option<&DateTime<Utc>>,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Issue>>;

    async fn user(&self, identity: &Identity) -> Result<Profile>;
}
