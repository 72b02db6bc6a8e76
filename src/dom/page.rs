use super::*;
use crate::board::Board;
use crate::confetti::Burst;
use crate::score::Scores;
use crate::screen::Screen;
use crate::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
extern "C" {
    /// Global installed by the canvas-confetti script tag.
    #[wasm_bindgen(js_name = confetti, catch)]
    fn launch(options: &JsValue) -> Result<JsValue, JsValue>;
}

/// [`Screen`] over the elements of the served page.
pub struct Page {
    document: Document,
    board: Element,
    status: Element,
    player: Element,
    ai: Element,
    draws: Element,
    sfx_slash: Element,
    music_slash: Element,
    modal: Element,
}

impl Page {
    pub fn new(document: &Document) -> JsResult<Self> {
        Ok(Self {
            document: document.clone(),
            board: by_id(document, ID_BOARD)?,
            status: by_id(document, ID_STATUS)?,
            player: by_id(document, ID_PLAYER_SCORE)?,
            ai: by_id(document, ID_AI_SCORE)?,
            draws: by_id(document, ID_DRAW_SCORE)?,
            sfx_slash: within(&by_id(document, ID_MUTE_SFX)?, SEL_SFX_SLASH)?,
            music_slash: within(&by_id(document, ID_MUTE_MUSIC)?, SEL_MUSIC_SLASH)?,
            modal: by_id(document, ID_ABOUT_MODAL)?,
        })
    }

    pub fn board_element(&self) -> &Element {
        &self.board
    }

    fn render(&self, board: &Board) -> JsResult<()> {
        self.board.set_inner_html("");
        for (cell, mark) in board.marks() {
            let div = self.document.create_element("div")?;
            let class = match mark.class() {
                Some(marker) => format!("{} {}", CLASS_CELL, marker),
                None => CLASS_CELL.to_string(),
            };
            div.set_class_name(&class);
            div.set_attribute(ATTR_INDEX, &cell.to_string())?;
            div.set_text_content(Some(&mark.to_string()));
            if !mark.is_empty() {
                div.class_list().add_1(CLASS_POP_IN)?;
            }
            self.board.append_child(&div)?;
        }
        Ok(())
    }

    fn reveal(element: &Element, visible: bool) -> JsResult<()> {
        element
            .class_list()
            .toggle_with_force(CLASS_HIDDEN, !visible)
            .map(|_| ())
    }

    fn report(what: &str, result: JsResult<()>) {
        result
            .inspect_err(|e| log::error!("failed to {}: {}", what, describe(e)))
            .ok();
    }
}

impl Screen for Page {
    fn board(&self, board: &Board) {
        Self::report("render board", self.render(board));
    }
    fn status(&self, text: &str) {
        self.status.set_text_content(Some(text));
    }
    fn scores(&self, scores: &Scores) {
        self.player.set_text_content(Some(&scores.player.to_string()));
        self.ai.set_text_content(Some(&scores.ai.to_string()));
        self.draws.set_text_content(Some(&scores.draws.to_string()));
    }
    fn sfx(&self, muted: bool) {
        Self::report("toggle effects icon", Self::reveal(&self.sfx_slash, muted));
    }
    fn music(&self, muted: bool) {
        Self::report("toggle music icon", Self::reveal(&self.music_slash, muted));
    }
    fn modal(&self, visible: bool) {
        Self::report("toggle modal", Self::reveal(&self.modal, visible));
    }
    fn confetti(&self, burst: &Burst) {
        let launched = serde_json::to_string(burst)
            .map_err(|e| JsValue::from_str(&e.to_string()))
            .and_then(|json| js_sys::JSON::parse(&json))
            .and_then(|options| launch(&options))
            .map(|_| ());
        Self::report("launch confetti", launched);
    }
}
