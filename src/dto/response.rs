use crate::board::Board;
use crate::score::Scores;
use crate::status::Outcome;
use serde::Deserialize;
use serde::Serialize;

/// Board snapshot returned by `/api/move` and `/api/reset`.
///
/// A rejected move (occupied cell, finished game) comes back without
/// `scores`, and before the first move the server may not have a status yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Board,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<Scores>,
}

impl GameState {
    pub fn outcome(&self) -> Outcome {
        self.status
            .as_deref()
            .map(Outcome::from)
            .unwrap_or(Outcome::Ongoing)
    }
    /// Finished with the human on top.
    pub fn is_player_win(&self) -> bool {
        self.game_over && self.outcome().is_player_win()
    }
}

/// Body returned by `/api/reset_scores`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreState {
    pub scores: Scores,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::STATUS_PLAYER_WINS;
    use crate::STATUS_TURN;

    #[test]
    fn decodes_move_response() {
        let json = r#"{
            "board": ["X","","","","O","","","",""],
            "status": "Player X's turn.",
            "gameOver": false,
            "scores": {"player": 0, "ai": 0, "draws": 0}
        }"#;
        let state = serde_json::from_str::<GameState>(json).unwrap();
        assert!(state.status.as_deref() == Some(STATUS_TURN));
        assert!(!state.game_over);
        assert!(state.scores == Some(Scores::default()));
        assert!(state.board.to_string() == "X../.O./...");
    }

    #[test]
    fn decodes_rejected_move() {
        let json = r#"{"board": ["","","","","","","","",""], "status": null, "gameOver": false}"#;
        let state = serde_json::from_str::<GameState>(json).unwrap();
        assert!(state.status.is_none());
        assert!(state.scores.is_none());
        assert!(state.outcome() == Outcome::Ongoing);
    }

    #[test]
    fn player_win_requires_game_over() {
        let mut state = GameState {
            board: Board::empty(),
            status: Some(STATUS_PLAYER_WINS.to_string()),
            game_over: false,
            scores: None,
        };
        assert!(!state.is_player_win());
        state.game_over = true;
        assert!(state.is_player_win());
    }

    #[test]
    fn encodes_camel_case() {
        let state = GameState {
            board: Board::empty(),
            status: None,
            game_over: true,
            scores: None,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("gameOver") == Some(&serde_json::Value::Bool(true)));
        assert!(json.get("scores").is_none());
    }

    #[test]
    fn decodes_score_reset() {
        let json = r#"{"scores": {"player": 0, "ai": 0, "draws": 0}}"#;
        let state = serde_json::from_str::<ScoreState>(json).unwrap();
        assert!(state.scores.games() == 0);
    }
}
