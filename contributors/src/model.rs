use crate::api::Error;
use chrono::{DateTime, Utc};
use derive_more::{Constructor, Display};
use std::str::FromStr;

/// Contributor account login as reported by the hosting API.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(String);

impl Identity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Identity {
    fn from(login: String) -> Self {
        Identity(login)
    }
}

impl From<&str> for Identity {
    fn from(login: &str) -> Self {
        Identity(login.to_string())
    }
}

/// Repository requested by the caller, `owner/name`.
#[derive(Debug, Display, Clone, PartialEq, Eq, Constructor)]
#[display(fmt = "{}/{}", owner, name)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoRef {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        match value.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(RepoRef::new(owner.to_string(), name.to_string()))
            }
            _ => Err(Error::InvalidRepository(value.to_string())),
        }
    }
}

/// Repository as known by the host, e.g. after a rename redirect.
#[derive(Debug, Display, Clone, PartialEq, Eq, Constructor)]
#[display(fmt = "{}/{}", owner, name)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Constructor)]
pub struct TimeWindow {
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// The host filters issues by update time, so both bounds are checked against creation time here.
    pub fn admits_issue(&self, created_at: &DateTime<Utc>) -> bool {
        self.since.map_or(true, |since| *created_at >= since) && self.until.map_or(true, |until| *created_at <= until)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct Commit {
    pub sha: String,
    /// `None` when the commit email is not linked to an account.
    pub author: Option<Identity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct Issue {
    pub number: u64,
    pub author: Identity,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct Profile {
    pub login: Identity,
    pub name: Option<String>,
    pub html_url: String,
    pub avatar_url: String,
}

impl Profile {
    /// Display name, if the account has a non-empty one.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Lowercased display name, falling back to the login.
    pub fn sort_key(&self) -> String {
        self.display_name().unwrap_or_else(|| self.login.as_str()).to_lowercase()
    }
}
