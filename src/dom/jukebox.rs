use super::*;
use crate::ID_CLICK_SOUND;
use crate::ID_MUSIC;
use crate::ID_WIN_SOUND;
use crate::audio::Speaker;
use web_sys::HtmlAudioElement;

/// [`Speaker`] over the page's three `<audio>` elements.
pub struct Jukebox {
    click: HtmlAudioElement,
    win: HtmlAudioElement,
    music: HtmlAudioElement,
}

impl Jukebox {
    pub fn new(document: &Document) -> JsResult<Self> {
        Ok(Self {
            click: typed(document, ID_CLICK_SOUND)?,
            win: typed(document, ID_WIN_SOUND)?,
            music: typed(document, ID_MUSIC)?,
        })
    }

    /// `play()` resolves asynchronously and rejects when the browser blocks
    /// autoplay, so the rejection is logged rather than left unhandled.
    fn play(audio: &HtmlAudioElement, name: &'static str) {
        match audio.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .inspect_err(|e| log::warn!("{} blocked: {}", name, describe(e)))
                    .ok();
            }),
            Err(e) => log::warn!("{} failed: {}", name, describe(&e)),
        }
    }
}

impl Speaker for Jukebox {
    fn click(&self) {
        self.click.set_current_time(0.0);
        Self::play(&self.click, "click sound");
    }
    fn win(&self) {
        Self::play(&self.win, "win sound");
    }
    fn music(&self, playing: bool) {
        if playing {
            Self::play(&self.music, "music");
        } else {
            self.music
                .pause()
                .inspect_err(|e| log::warn!("music pause failed: {}", describe(e)))
                .ok();
        }
    }
}
