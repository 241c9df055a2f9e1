//! GitHub REST v3 implementation of [`contributors::Client`].

mod builder;
mod payload;
mod rate_limit;

pub use builder::{GithubClientBuilder, GITHUB_URL};
pub use rate_limit::RateLimit;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use contributors::model::{Commit, Identity, Issue, Profile, RepoRef, Repository, TimeWindow};
use contributors::{Client, Result};
use log::debug;
use reqwest::Response;
use serde::de::DeserializeOwned;
use url::Url;

pub struct GithubClient {
    client: reqwest::Client,
    github_url: Url,
}

impl GithubClient {
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.github_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Invalid GitHub API URL: {}", self.github_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url, query: &[(&str, String)]) -> Result<T> {
        debug!("GET {} {:?}", url, query);
        let response = self.client.get(url).query(query).send().await?;
        Ok(read_response(response).await?)
    }
}

pub(crate) async fn read_response<T: DeserializeOwned>(response: Response) -> reqwest::Result<T> {
    rate_limit::log_quota(response.headers());
    response.error_for_status()?.json::<T>().await
}

fn timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn page_query(page: u32, per_page: u32) -> [(&'static str, String); 2] {
    [("page", page.to_string()), ("per_page", per_page.to_string())]
}

#[async_trait]
impl Client for GithubClient {
    const MAX_PAGE_SIZE: u32 = 100;
    const FIRST_PAGE_NUMBER: u32 = 1;

    async fn rate_limit_remaining(&self) -> Result<u32> {
        let url = self.endpoint(&["rate_limit"])?;
        let body = self.get::<payload::RateLimitBody>(url, &[]).await?;
        let rate_limit = RateLimit::from(body.resources.core);
        debug!("Core rate limit {:?}", rate_limit);
        Ok(rate_limit.remaining)
    }

    async fn repository(&self, repo: &RepoRef) -> Result<Repository> {
        let url = self.endpoint(&["repos", &repo.owner, &repo.name])?;
        let repo = self.get::<payload::Repo>(url, &[]).await?;
        Ok(repo.into())
    }

    async fn commits(&self, repo: &Repository, window: &TimeWindow, page: u32, per_page: u32) -> Result<Vec<Commit>> {
        let url = self.endpoint(&["repos", &repo.owner, &repo.name, "commits"])?;
        let mut query = Vec::from(page_query(page, per_page));
        if let Some(since) = &window.since {
            query.push(("since", timestamp(since)));
        }
        if let Some(until) = &window.until {
            query.push(("until", timestamp(until)));
        }
        let commits = self.get::<Vec<payload::Commit>>(url, &query).await?;
        Ok(commits.into_iter().map(Commit::from).collect())
    }

    async fn closed_issues(
        &self,
        repo: &Repository,
        since: Option<&DateTime<Utc>>,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Issue>> {
        let url = self.endpoint(&["repos", &repo.owner, &repo.name, "issues"])?;
        let mut query = vec![("state", "closed".to_string())];
        query.extend(page_query(page, per_page));
        if let Some(since) = since {
            query.push(("since", timestamp(since)));
        }
        let issues = self.get::<Vec<payload::Issue>>(url, &query).await?;
        Ok(issues.into_iter().map(Issue::from).collect())
    }

    async fn user(&self, identity: &Identity) -> Result<Profile> {
        let url = self.endpoint(&["users", identity.as_str()])?;
        let user = self.get::<payload::User>(url, &[]).await?;
        Ok(user.into())
    }
}
