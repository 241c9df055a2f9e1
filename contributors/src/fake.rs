//! In-memory `Client` for tests.

use crate::api::{Client, Result};
use crate::model::{Commit, Identity, Issue, Profile, RepoRef, Repository, TimeWindow};
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub type DatedCommit = (DateTime<Utc>, Commit);

pub fn commit(date: &str, author: Option<&str>) -> DatedCommit {
    let date = date.parse().unwrap();
    (date, Commit::new(format!("sha-{}", date), author.map(Identity::from)))
}

pub fn issue(created_at: &str, author: &str) -> Issue {
    Issue::new(0, author.into(), created_at.parse().unwrap())
}

#[derive(Default)]
struct FakeRepo {
    commits: Vec<DatedCommit>,
    issues: Vec<Issue>,
}

pub struct FakeClient {
    remaining: u32,
    repos: HashMap<String, FakeRepo>,
    deleted: HashSet<Identity>,
    names: HashMap<Identity, String>,
    commit_pages: Mutex<Vec<u32>>,
    user_lookups: Mutex<Vec<Identity>>,
}

impl Default for FakeClient {
    fn default() -> Self {
        FakeClient {
            remaining: 5000,
            repos: HashMap::new(),
            deleted: HashSet::new(),
            names: HashMap::new(),
            commit_pages: Mutex::new(Vec::new()),
            user_lookups: Mutex::new(Vec::new()),
        }
    }
}

impl FakeClient {
    pub fn with_remaining(mut self, remaining: u32) -> Self {
        self.remaining = remaining;
        self
    }

    pub fn with_commits(mut self, repo: &str, commits: Vec<DatedCommit>) -> Self {
        self.repos.entry(repo.to_string()).or_default().commits.extend(commits);
        self
    }

    pub fn with_issues(mut self, repo: &str, issues: Vec<Issue>) -> Self {
        self.repos.entry(repo.to_string()).or_default().issues.extend(issues);
        self
    }

    pub fn with_name(mut self, login: &str, name: &str) -> Self {
        self.names.insert(login.into(), name.to_string());
        self
    }

    pub fn with_deleted(mut self, login: &str) -> Self {
        self.deleted.insert(login.into());
        self
    }

    pub fn commit_pages(&self) -> Vec<u32> {
        self.commit_pages.lock().unwrap().clone()
    }

    pub fn user_lookups(&self) -> Vec<Identity> {
        self.user_lookups.lock().unwrap().clone()
    }

    fn repo(&self, repo: &Repository) -> Result<&FakeRepo> {
        self.repos
            .get(&repo.to_string())
            .ok_or_else(|| anyhow!("Not Found: {}", repo).into())
    }
}

fn page<T>(items: Vec<T>, page: u32, per_page: u32) -> Vec<T> {
    items
        .into_iter()
        .skip(((page - FakeClient::FIRST_PAGE_NUMBER) * per_page) as usize)
        .take(per_page as usize)
        .collect()
}

#[async_trait]
impl Client for FakeClient {
    const MAX_PAGE_SIZE: u32 = 2;
    const FIRST_PAGE_NUMBER: u32 = 1;

    async fn rate_limit_remaining(&self) -> Result<u32> {
        Ok(self.remaining)
    }

    async fn repository(&self, repo: &RepoRef) -> Result<Repository> {
        let repository = Repository::new(repo.owner.clone(), repo.name.clone());
        self.repo(&repository)?;
        Ok(repository)
    }

    async fn commits(&self, repo: &Repository, window: &TimeWindow, page_no: u32, per_page: u32) -> Result<Vec<Commit>> {
        self.commit_pages.lock().unwrap().push(page_no);
        let commits = self
            .repo(repo)?
            .commits
            .iter()
            .filter(|(date, _)| window.since.map_or(true, |since| *date >= since))
            .filter(|(date, _)| window.until.map_or(true, |until| *date <= until))
            .map(|(_, commit)| commit.clone())
            .collect();
        Ok(page(commits, page_no, per_page))
    }

    /// Every issue is treated as updated recently, so `since` lets all of them through.
    async fn closed_issues(
        &self,
        repo: &Repository,
        _since: Option<&DateTime<Utc>>,
        page_no: u32,
        per_page: u32,
    ) -> Result<Vec<Issue>> {
        let issues = self.repo(repo)?.issues.clone();
        Ok(page(issues, page_no, per_page))
    }

    async fn user(&self, identity: &Identity) -> Result<Profile> {
        self.user_lookups.lock().unwrap().push(identity.clone());
        if self.deleted.contains(identity) {
            return Err(anyhow!("Not Found: {}", identity).into());
        }
        Ok(Profile::new(
            identity.clone(),
            self.names.get(identity).cloned(),
            format!("https://github.com/{}", identity),
            format!("https://avatars.githubusercontent.com/{}", identity),
        ))
    }
}
