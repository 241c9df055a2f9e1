use contributors::aggregator::RATE_LIMIT_THRESHOLD;
use contributors::{Confirmation, Result};
use std::io::{self, BufRead, Write};

/// Asks on the terminal whether to continue with a low rate limit.
pub struct StdinPrompt;

impl Confirmation for StdinPrompt {
    fn proceed(&self, remaining: u32) -> Result<bool> {
        ask(remaining, io::stdin().lock(), io::stderr())
    }
}

fn ask(remaining: u32, mut input: impl BufRead, mut output: impl Write) -> Result<bool> {
    write!(
        output,
        "Your GitHub rate limit is below {} ({} left). Continue? (y/n) ",
        RATE_LIMIT_THRESHOLD, remaining
    )?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
