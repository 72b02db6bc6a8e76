mod endpoints;
#[cfg(feature = "client")]
mod remote;

pub use endpoints::*;
#[cfg(feature = "client")]
pub use remote::*;

use crate::board::Cell;
use crate::dto::GameState;
use crate::dto::ScoreState;

/// The move service, seen from the page.
///
/// Every game rule lives behind this trait. The browser runtime is
/// single-threaded, so implementations need not be `Send`; the in-memory
/// doubles in tests rely on that too.
#[async_trait::async_trait(?Send)]
pub trait Api {
    /// Place the player's mark. The reply already includes the computer's answer.
    async fn play(&self, cell: Cell) -> anyhow::Result<GameState>;
    /// Clear the board, keeping the tally.
    async fn reset(&self) -> anyhow::Result<GameState>;
    /// Zero the tally.
    async fn clear(&self) -> anyhow::Result<ScoreState>;
}
