use clap::Parser;
use std::path::PathBuf;

/// Serve the tic-tac-toe page and its client bundle.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind: String,
    /// Directory holding `index.html`, `static/` and the `pkg/` bundle.
    #[arg(long, env = "SITE_ROOT", default_value = "site")]
    pub root: PathBuf,
    /// Base URL of the move service that `/api/*` is forwarded to.
    #[arg(long, env = "API_UPSTREAM")]
    pub api: Option<String>,
}
