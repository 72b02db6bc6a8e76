/// The about dialog. Starts hidden; the open and close buttons share one toggle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Modal {
    visible: bool,
}

impl Modal {
    pub fn is_visible(&self) -> bool {
        self.visible
    }
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}
