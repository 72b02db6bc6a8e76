use crate::api::Api;
use crate::audio::Mixer;
use crate::audio::Speaker;
use crate::board::Board;
use crate::board::Cell;
use crate::confetti::Burst;
use crate::dto::GameState;
use crate::modal::Modal;
use crate::score::Scores;
use crate::screen::Screen;
use std::cell::RefCell;

/// Local mirror of the last server reply plus the page's cosmetic flags.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct View {
    pub board: Board,
    pub status: String,
    pub game_over: bool,
    pub scores: Scores,
    pub mixer: Mixer,
    pub modal: Modal,
}

/// Drives a [`Screen`] and a [`Speaker`] from the replies of an [`Api`].
///
/// The controller holds no game logic. It gates clicks on the two facts it
/// can see locally (game over, occupied cell) and otherwise replaces its
/// [`View`] wholesale with whatever the service returns.
///
/// All methods take `&self` so one controller can be shared by every event
/// listener on the page. State is borrowed only between awaits, never across
/// one, so a second click arriving mid-request sees the pre-request view.
pub struct Controller<A, S, P> {
    api: A,
    screen: S,
    speaker: P,
    view: RefCell<View>,
}

impl<A, S, P> Controller<A, S, P>
where
    A: Api,
    S: Screen,
    P: Speaker,
{
    pub fn new(api: A, screen: S, speaker: P) -> Self {
        Self {
            api,
            screen,
            speaker,
            view: RefCell::new(View::default()),
        }
    }

    /// First paint: empty grid, zeroed tally, icons matching the mixer.
    pub fn mount(&self) {
        let view = self.view();
        self.screen.board(&view.board);
        self.screen.scores(&view.scores);
        self.screen.sfx(view.mixer.sfx_muted());
        self.screen.music(view.mixer.music_muted());
        self.screen.modal(view.modal.is_visible());
        log::info!("mounted board {}", view.board);
    }

    /// Player clicked a cell.
    ///
    /// Ignored once the game is over or when the cell is taken. On a player
    /// win the fanfare plays and confetti fires.
    pub async fn click(&self, cell: Cell) -> anyhow::Result<()> {
        if !self.accepts(cell) {
            log::debug!("ignoring click on cell {}", cell);
            return Ok(());
        }
        if !self.sfx_muted() {
            self.speaker.click();
        }
        let state = self
            .api
            .play(cell)
            .await
            .inspect_err(|e| log::error!("move {} failed: {}", cell, e))?;
        let celebrate = state.is_player_win();
        self.apply(state);
        self.paint();
        if celebrate {
            self.celebrate();
        }
        Ok(())
    }

    /// New game, same tally.
    pub async fn reset(&self) -> anyhow::Result<()> {
        let state = self
            .api
            .reset()
            .await
            .inspect_err(|e| log::error!("reset failed: {}", e))?;
        self.apply(state);
        self.paint();
        log::info!("board reset");
        Ok(())
    }

    /// Zero the tally, leave the board alone.
    pub async fn clear(&self) -> anyhow::Result<()> {
        let state = self
            .api
            .clear()
            .await
            .inspect_err(|e| log::error!("score reset failed: {}", e))?;
        let before = std::mem::replace(&mut self.view.borrow_mut().scores, state.scores);
        self.screen.scores(&state.scores);
        log::info!("scores reset after {} games ({})", before.games(), before);
        Ok(())
    }

    pub fn toggle_sfx(&self) {
        let muted = self.view.borrow_mut().mixer.toggle_sfx();
        self.screen.sfx(muted);
    }

    pub fn toggle_music(&self) {
        let playing = self.view.borrow_mut().mixer.toggle_music();
        self.speaker.music(playing);
        self.screen.music(!playing);
    }

    pub fn toggle_modal(&self) {
        let visible = self.view.borrow_mut().modal.toggle();
        self.screen.modal(visible);
    }

    pub fn view(&self) -> View {
        self.view.borrow().clone()
    }
    pub fn api(&self) -> &A {
        &self.api
    }
    pub fn screen(&self) -> &S {
        &self.screen
    }
    pub fn speaker(&self) -> &P {
        &self.speaker
    }
}

impl<A, S, P> Controller<A, S, P>
where
    A: Api,
    S: Screen,
    P: Speaker,
{
    fn accepts(&self, cell: Cell) -> bool {
        let view = self.view.borrow();
        !view.game_over && view.board.is_vacant(cell)
    }

    fn sfx_muted(&self) -> bool {
        self.view.borrow().mixer.sfx_muted()
    }

    /// Server state replaces local state. A missing status or tally keeps
    /// the previous one.
    fn apply(&self, state: GameState) {
        let mut view = self.view.borrow_mut();
        view.board = state.board;
        view.game_over = state.game_over;
        if let Some(status) = state.status {
            view.status = status;
        }
        if let Some(scores) = state.scores {
            view.scores = scores;
        }
    }

    fn paint(&self) {
        let view = self.view();
        self.screen.board(&view.board);
        self.screen.status(&view.status);
        self.screen.scores(&view.scores);
    }

    fn celebrate(&self) {
        log::info!("player wins");
        if !self.sfx_muted() {
            self.speaker.win();
        }
        self.screen.confetti(&Burst::default());
    }
}
