use crate::API_MOVE;
use crate::API_RESET;
use crate::API_RESET_SCORES;

/// Where the move service lives. Empty base means same origin.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }
    pub fn base(&self) -> &str {
        &self.base
    }
    /// The service keeps the game in a session cookie, which `fetch` only
    /// sends to another origin when asked to.
    pub fn is_cross_origin(&self) -> bool {
        !self.base.is_empty()
    }
    pub fn play(&self) -> String {
        self.join(API_MOVE)
    }
    pub fn reset(&self) -> String {
        self.join(API_RESET)
    }
    pub fn clear(&self) -> String {
        self.join(API_RESET_SCORES)
    }
    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl From<Option<String>> for Endpoints {
    fn from(base: Option<String>) -> Self {
        base.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Endpoints::new)
            .unwrap_or_default()
    }
}
