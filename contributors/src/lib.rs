//! Contributors listing
//!
//! # Overview
//!
//! Lists everyone who contributed to a set of hosted repositories: commit authors and
//! authors of closed issues and pull requests, optionally limited to a time window.
//! Distinct identities are collected across all repositories, each one is looked up for
//! its profile (name, avatar, profile link), profiles are sorted case-insensitively by
//! name (or login when there is no name) and rendered as rst, markdown or an html table.
//!
//! The hosting API is abstracted by [`api::Client`], the GitHub implementation lives in
//! the `contributors_github_client` crate.

pub mod api;
pub mod model;
pub mod render;

#[cfg(feature = "aggregator")]
pub mod aggregator;
#[cfg(feature = "aggregator")]
pub mod resolver;

#[cfg(all(test, feature = "aggregator"))]
mod fake;

pub use api::{Client, Error, Result};
pub use model::{Identity, Profile, RepoRef, TimeWindow};
pub use render::Format;

#[cfg(feature = "aggregator")]
pub use aggregator::{Aggregator, Confirmation, QuotaPolicy};

/// Sorts by lowercased display name, or login if there is none. Stable.
pub fn sort_profiles(profiles: &mut [Profile]) {
    profiles.sort_by_cached_key(Profile::sort_key);
}

/// Aggregates, resolves, sorts and renders contributors of `repos`.
#[cfg(feature = "aggregator")]
pub async fn contributors<CLIENT, CONFIRM>(
    client: &CLIENT,
    confirmation: &CONFIRM,
    repos: &[RepoRef],
    window: &TimeWindow,
    format: Format,
) -> Result<String>
where
    CLIENT: Client,
    CONFIRM: Confirmation,
{
    let identities = Aggregator::new(client).aggregate(repos, window, confirmation).await?;
    let mut profiles = resolver::resolve_all(client, identities).await?;
    sort_profiles(&mut profiles);
    log::info!("Building {} output", format);
    Ok(format.render(&profiles))
}

#[test]
fn sort_profiles_test() {
    let profile = |login: &str, name: &str| Profile::new(login.into(), Some(name.to_string()), String::new(), String::new());
    let mut profiles = vec![profile("b", "Bob"), profile("Aaron", ""), profile("a2", "alice")];
    sort_profiles(&mut profiles);
    let order: Vec<String> = profiles
        .iter()
        .map(|p| p.display_name().unwrap_or_else(|| p.login.as_str()).to_string())
        .collect();
    assert_eq!(order, vec!["Aaron", "alice", "Bob"]);
}

#[test]
fn sort_profiles_stable_test() {
    let profile = |login: &str| Profile::new(login.into(), Some("Same".to_string()), String::new(), String::new());
    let mut profiles = vec![profile("z"), profile("a"), profile("m")];
    sort_profiles(&mut profiles);
    let logins: Vec<&str> = profiles.iter().map(|p| p.login.as_str()).collect();
    assert_eq!(logins, vec!["z", "a", "m"]);
}
