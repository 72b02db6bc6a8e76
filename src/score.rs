use serde::Deserialize;
use serde::Serialize;

/// Running tally kept by the move service across games.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub player: u32,
    pub ai: u32,
    pub draws: u32,
}

impl Scores {
    pub fn games(&self) -> u32 {
        self.player + self.ai + self.draws
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.player, self.ai, self.draws)
    }
}
