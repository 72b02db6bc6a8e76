use crate::CONFETTI_ORIGIN_Y;
use crate::CONFETTI_PARTICLES;
use crate::CONFETTI_SPREAD;
use serde::Serialize;

/// Options for the page's `confetti(...)` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Burst {
    pub particle_count: u32,
    pub spread: u32,
    pub origin: Origin,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Origin {
    pub y: f64,
}

impl Default for Burst {
    fn default() -> Self {
        Self {
            particle_count: CONFETTI_PARTICLES,
            spread: CONFETTI_SPREAD,
            origin: Origin {
                y: CONFETTI_ORIGIN_Y,
            },
        }
    }
}
