use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Number of cells on the grid.
pub const CELLS: usize = 9;

/// Row-major 3x3 grid mirrored from the move service.
///
/// Serialized as a flat array of nine marks; any other length is rejected.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([Mark; CELLS]);

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn get(&self, cell: Cell) -> Mark {
        self.0[cell.index()]
    }
    pub fn is_vacant(&self, cell: Cell) -> bool {
        self.get(cell).is_empty()
    }
    pub fn marks(&self) -> impl Iterator<Item = (Cell, Mark)> + '_ {
        Cell::all().zip(self.0.iter().copied())
    }
}

impl From<[Mark; CELLS]> for Board {
    fn from(marks: [Mark; CELLS]) -> Self {
        Self(marks)
    }
}

/// Compact form: `X.O/...` rows, `.` for empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (cell, mark) in self.marks() {
            if cell.index() > 0 && cell.index() % 3 == 0 {
                write!(f, "/")?;
            }
            match mark {
                Mark::Empty => write!(f, ".")?,
                mark => write!(f, "{}", mark)?,
            }
        }
        Ok(())
    }
}
