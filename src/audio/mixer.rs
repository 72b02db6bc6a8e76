/// Two independent mutes. Effects start audible, music starts silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mixer {
    sfx_muted: bool,
    music_muted: bool,
}

impl Default for Mixer {
    fn default() -> Self {
        Self {
            sfx_muted: false,
            music_muted: true,
        }
    }
}

impl Mixer {
    pub fn sfx_muted(&self) -> bool {
        self.sfx_muted
    }
    pub fn music_muted(&self) -> bool {
        self.music_muted
    }
    /// Returns the new mute state.
    pub fn toggle_sfx(&mut self) -> bool {
        self.sfx_muted = !self.sfx_muted;
        self.sfx_muted
    }
    /// Returns whether the background track should now be playing.
    pub fn toggle_music(&mut self) -> bool {
        self.music_muted = !self.music_muted;
        !self.music_muted
    }
}
