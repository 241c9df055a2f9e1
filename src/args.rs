use chrono::{DateTime, Utc};
use clap::Parser;
use contributors::{Format, RepoRef};
use secrecy::SecretString;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Comma separated repositories, e.g. audreyr/cookiecutter,pydanny/contributors
    #[clap(required = true, use_value_delimiter = true)]
    pub repos: Vec<RepoRef>,

    /// Only contributions after this date (RFC 3339, e.g. 2020-01-01T00:00:00Z)
    #[clap(long, env = "CONTRIBUTORS_SINCE")]
    pub since: Option<DateTime<Utc>>,

    /// Only contributions before this date (RFC 3339)
    #[clap(long, env = "CONTRIBUTORS_UNTIL")]
    pub until: Option<DateTime<Utc>>,

    /// Output format: rst, md, markdown or html
    #[clap(short, long, env = "CONTRIBUTORS_FORMAT", default_value = "rst", parse(try_from_str = Format::parse))]
    pub format: Format,

    /// API OAuth access token
    #[clap(long, env = "GITHUB_API_SECRET", hide_env_values = true)]
    pub api_token: Option<SecretString>,

    /// Repository API URL
    #[clap(long, env, default_value = "https://api.github.com")]
    pub api_url: String,
}
