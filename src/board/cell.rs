use super::CELLS;
use serde::Serialize;

/// Index of a grid cell, row-major, always in `0..9`.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Cell(u8);

impl Cell {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELLS as u8).map(Cell)
    }
}

/// usize injection
impl TryFrom<usize> for Cell {
    type Error = anyhow::Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        if n < CELLS {
            Ok(Cell(n as u8))
        } else {
            Err(anyhow::anyhow!("cell index out of range: {}", n))
        }
    }
}
impl From<Cell> for usize {
    fn from(cell: Cell) -> usize {
        cell.index()
    }
}

/// Parsed from the `data-index` attribute of a rendered cell.
impl TryFrom<&str> for Cell {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .parse::<usize>()
            .map_err(|e| anyhow::anyhow!("invalid cell index {:?}: {}", s, e))
            .and_then(Cell::try_from)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
