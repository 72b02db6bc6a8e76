//! hosting Server Binary
//!
//! Serves the game page and the compiled client bundle, and forwards
//! `/api/*` to the move service named by `--api`.

use clap::Parser;
use tictactoe::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    kys();
    hosting::Server::run(hosting::Args::parse()).await?;
    Ok(())
}
