use anyhow::anyhow;
use chrono::{TimeZone, Utc};
use contributors::Result;
use derive_more::Constructor;
use log::{debug, warn};
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use std::str::FromStr;

/// Quota reported with every GitHub API response.
#[derive(Constructor, Debug, PartialEq)]
pub struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
    pub reset: i64,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap<HeaderValue>) -> Result<RateLimit> {
        Ok(RateLimit::new(
            read_header(headers, "x-ratelimit-limit")?,
            read_header(headers, "x-ratelimit-remaining")?,
            read_header(headers, "x-ratelimit-reset")?,
        ))
    }
}

/// Logs the quota left after a response. Responses without rate limit headers are ignored.
pub(crate) fn log_quota(headers: &HeaderMap<HeaderValue>) {
    let rate_limit = match RateLimit::from_headers(headers) {
        Ok(rate_limit) => rate_limit,
        Err(_) => return,
    };
    debug!("Remaining limit {}/{}", rate_limit.remaining, rate_limit.limit);
    if rate_limit.remaining == 0 {
        match Utc.timestamp_opt(rate_limit.reset, 0).single() {
            Some(reset) => warn!("API rate limit exhausted until {}", reset),
            None => warn!("API rate limit exhausted"),
        }
    }
}

fn read_header<T>(headers: &HeaderMap<HeaderValue>, header: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let value = headers
        .get(header)
        .ok_or_else(|| anyhow!("Header {} not found", header))?
        .to_str()
        .map_err(anyhow::Error::from)?;
    Ok(value.parse::<T>().map_err(anyhow::Error::from)?)
}

#[test]
fn from_headers_test() -> anyhow::Result<()> {
    let mut headers = HeaderMap::new();
    headers.insert("x-ratelimit-limit", HeaderValue::from_str("5000")?);
    headers.insert("x-ratelimit-remaining", HeaderValue::from_str("4999")?);
    headers.insert("x-ratelimit-reset", HeaderValue::from_str("1372700873")?);
    assert_eq!(RateLimit::from_headers(&headers)?, RateLimit::new(5000, 4999, 1372700873));
    Ok(())
}

#[test]
fn missing_header_test() -> anyhow::Result<()> {
    let mut headers = HeaderMap::new();
    headers.insert("x-ratelimit-limit", HeaderValue::from_str("5000")?);
    headers.insert("x-ratelimit-remaining", HeaderValue::from_str("not a number")?);
    assert!(RateLimit::from_headers(&headers).is_err());
    Ok(())
}
