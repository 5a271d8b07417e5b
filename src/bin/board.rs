// Binary entry point for the command-line board.
use anyhow::Result;
use event_architect::cli;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = cli::parse_args(&args)?;
    cli::run(parsed).await
}
