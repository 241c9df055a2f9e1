use crate::api::{Client, Error, Result};
use crate::model::{Identity, RepoRef, Repository, TimeWindow};
use derive_more::Constructor;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::ops::AddAssign;

/// Below this many remaining requests the caller is asked whether to go on.
pub const RATE_LIMIT_THRESHOLD: u32 = 1000;

/// Decides whether to continue when the remaining quota is low.
pub trait Confirmation {
    fn proceed(&self, remaining: u32) -> Result<bool>;
}

/// Non-interactive answer to the quota question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaPolicy {
    Proceed,
    Abort,
}

impl Confirmation for QuotaPolicy {
    fn proceed(&self, _remaining: u32) -> Result<bool> {
        Ok(*self == QuotaPolicy::Proceed)
    }
}

/// Collects distinct contributor identities across repositories.
pub struct Aggregator<'a, CLIENT: Client> {
    client: &'a CLIENT,
    threshold: u32,
}

impl<'a, CLIENT: Client> Aggregator<'a, CLIENT> {
    pub fn new(client: &'a CLIENT) -> Self {
        Aggregator {
            client,
            threshold: RATE_LIMIT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Walks `repos` in order, commits first then closed issues of each.
    ///
    /// Fails with `Error::Aborted` if the quota is low and `confirmation` declines.
    /// Any API error aborts the whole aggregation.
    pub async fn aggregate<CONFIRM: Confirmation>(
        &self,
        repos: &[RepoRef],
        window: &TimeWindow,
        confirmation: &CONFIRM,
    ) -> Result<HashSet<Identity>> {
        self.check_quota(confirmation).await?;

        let mut identities = HashSet::new();
        info!("Starting aggregating contributors across {} projects", repos.len());
        for repo in repos {
            info!("Fetching data for {}", repo);
            let repo = self.client.repository(repo).await?;
            self.commit_authors(&repo, window, &mut identities).await?;
            self.issue_authors(&repo, window, &mut identities).await?;
        }
        info!("Found {} distinct contributors", identities.len());
        Ok(identities)
    }

    async fn check_quota<CONFIRM: Confirmation>(&self, confirmation: &CONFIRM) -> Result<()> {
        let remaining = self.client.rate_limit_remaining().await?;
        debug!("Remaining rate limit {}", remaining);
        if remaining < self.threshold {
            warn!("Rate limit {} is below {}", remaining, self.threshold);
            if !confirmation.proceed(remaining)? {
                return Err(Error::Aborted);
            }
        }
        Ok(())
    }

    async fn commit_authors(
        &self,
        repo: &Repository,
        window: &TimeWindow,
        identities: &mut HashSet<Identity>,
    ) -> Result<()> {
        let mut paginator = Paginator::new(CLIENT::FIRST_PAGE_NUMBER, CLIENT::MAX_PAGE_SIZE, false);
        while let Some(page) = paginator.next_page() {
            let commits = self.client.commits(repo, window, page.page_no, page.page_size).await?;
            paginator.received(commits.len());
            for commit in commits {
                match commit.author {
                    Some(author) => {
                        debug!("Commit {} by {}", commit.sha, author);
                        identities.insert(author);
                    }
                    None => debug!("Commit {} has no linked author", commit.sha),
                }
            }
        }
        Ok(())
    }

    async fn issue_authors(
        &self,
        repo: &Repository,
        window: &TimeWindow,
        identities: &mut HashSet<Identity>,
    ) -> Result<()> {
        let mut paginator = Paginator::new(CLIENT::FIRST_PAGE_NUMBER, CLIENT::MAX_PAGE_SIZE, false);
        while let Some(page) = paginator.next_page() {
            let issues = self
                .client
                .closed_issues(repo, window.since.as_ref(), page.page_no, page.page_size)
                .await?;
            paginator.received(issues.len());
            for issue in issues {
                if !window.admits_issue(&issue.created_at) {
                    debug!("Issue #{} created outside the window, skipping", issue.number);
                    continue;
                }
                debug!("Issue #{} by {}", issue.number, issue.author);
                identities.insert(issue.author);
            }
        }
        Ok(())
    }
}

#[derive(Constructor)]
struct Page {
    page_no: u32,
    page_size: u32,
}

/// Hands out pages until one comes back short.
#[derive(Constructor)]
struct Paginator {
    page_no: u32,
    page_size: u32,
    exhausted: bool,
}

impl Paginator {
    fn next_page(&mut self) -> Option<Page> {
        if self.exhausted {
            return None;
        }
        let page = Page::new(self.page_no, self.page_size);
        self.page_no.add_assign(1);
        Some(page)
    }

    fn received(&mut self, count: usize) {
        if count < self.page_size as usize {
            self.exhausted = true;
        }
    }
}
