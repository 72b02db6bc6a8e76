use crate::board::Cell;
use serde::Serialize;

/// Body of `POST /api/move`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MoveRequest {
    pub cell: Cell,
}

impl From<Cell> for MoveRequest {
    fn from(cell: Cell) -> Self {
        Self { cell }
    }
}
