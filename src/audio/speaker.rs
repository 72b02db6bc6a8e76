/// Sound output. Muting is decided by the caller; a `Speaker` always plays.
pub trait Speaker {
    /// Short tick on a player move, restarted from the top each time.
    fn click(&self);
    /// Fanfare when the player wins.
    fn win(&self);
    /// Start or pause the background track.
    fn music(&self, playing: bool);
}
