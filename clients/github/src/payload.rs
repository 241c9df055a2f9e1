use chrono::{DateTime, Utc};
use contributors::model;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Repo {
    pub name: String,
    pub owner: Account,
}

#[derive(Deserialize, Debug)]
pub struct Account {
    pub login: String,
}

impl From<Repo> for model::Repository {
    fn from(repo: Repo) -> Self {
        model::Repository::new(repo.owner.login, repo.name)
    }
}

#[derive(Deserialize, Debug)]
pub struct Commit {
    pub sha: String,
    /// `null` when the commit email is not linked to a GitHub account.
    pub author: Option<Account>,
}

impl From<Commit> for model::Commit {
    fn from(commit: Commit) -> Self {
        model::Commit::new(commit.sha, commit.author.map(|author| author.login.into()))
    }
}

#[derive(Deserialize, Debug)]
pub struct Issue {
    pub number: u64,
    pub user: Account,
    pub created_at: DateTime<Utc>,
}

impl From<Issue> for model::Issue {
    fn from(issue: Issue) -> Self {
        model::Issue::new(issue.number, issue.user.login.into(), issue.created_at)
    }
}

#[derive(Deserialize, Debug)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub html_url: String,
    pub avatar_url: String,
}

impl From<User> for model::Profile {
    fn from(user: User) -> Self {
        model::Profile::new(user.login.into(), user.name, user.html_url, user.avatar_url)
    }
}

#[derive(Deserialize, Debug)]
pub struct RateLimitBody {
    pub resources: RateLimitResources,
}

#[derive(Deserialize, Debug)]
pub struct RateLimitResources {
    pub core: RateLimitResource,
}

#[derive(Deserialize, Debug)]
pub struct RateLimitResource {
    pub limit: u32,
    pub remaining: u32,
    pub reset: i64,
}

impl From<RateLimitResource> for crate::RateLimit {
    fn from(resource: RateLimitResource) -> Self {
        crate::RateLimit::new(resource.limit, resource.remaining, resource.reset)
    }
}
