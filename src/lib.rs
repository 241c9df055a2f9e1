mod args;
mod prompt;

pub use args::Args;
pub use prompt::StdinPrompt;

use contributors::{Confirmation, Result, TimeWindow};
use github_client::GithubClientBuilder;
use log::info;

/// Builds a GitHub client from `args` and renders the contributors document.
pub async fn collect_contributors<CONFIRM: Confirmation>(args: Args, confirmation: &CONFIRM) -> Result<String> {
    let mut client = GithubClientBuilder::default().with_github_url(&args.api_url);
    match args.api_token {
        Some(token) => client = client.try_with_token(token)?,
        None => info!("No API token, using unauthenticated access"),
    }
    let client = client.build()?;

    let window = TimeWindow::new(args.since, args.until);
    contributors::contributors(&client, confirmation, &args.repos, &window, args.format).await
}
