//! Hosting for the game page.
//!
//! Serves `index.html` and the compiled client bundle. When a move service
//! is configured, `/api/*` is forwarded to it so page and API share one
//! origin; otherwise those routes answer 503.
mod args;
mod server;
mod site;
mod upstream;

pub use args::*;
pub use server::*;
pub use site::*;
pub use upstream::*;
