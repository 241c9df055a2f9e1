use clap::Parser;
use contributors::Error;
use contributors_app::{Args, StdinPrompt};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let output = contributors_app::collect_contributors(args, &StdinPrompt).await?;
    print!("{}", output);

    Ok(())
}
