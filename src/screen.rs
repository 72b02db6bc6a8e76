use crate::board::Board;
use crate::confetti::Burst;
use crate::score::Scores;

/// Everything the controller can show.
///
/// Implementations render what they are told and keep no game state of
/// their own. Rendering failures are theirs to log; the controller never
/// sees them.
pub trait Screen {
    fn board(&self, board: &Board);
    fn status(&self, text: &str);
    fn scores(&self, scores: &Scores);
    /// Show the slash over the effects icon when muted.
    fn sfx(&self, muted: bool);
    /// Show the slash over the music icon when muted.
    fn music(&self, muted: bool);
    fn modal(&self, visible: bool);
    fn confetti(&self, burst: &Burst);
}
