use crate::STATUS_AI_WINS;
use crate::STATUS_DRAW;
use crate::STATUS_PLAYER_WINS;

/// How the server's status line reads.
///
/// The text itself is authoritative and rendered verbatim; this only
/// recognizes the phrases the client reacts to.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Outcome {
    PlayerWin,
    AiWin,
    Draw,
    Ongoing,
}

impl Outcome {
    pub fn is_player_win(&self) -> bool {
        matches!(self, Outcome::PlayerWin)
    }
}

/// Substring match, so decorated or prefixed text still classifies.
impl From<&str> for Outcome {
    fn from(status: &str) -> Self {
        if status.contains(STATUS_PLAYER_WINS) {
            Outcome::PlayerWin
        } else if status.contains(STATUS_AI_WINS) {
            Outcome::AiWin
        } else if status.contains(STATUS_DRAW) {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }
}
