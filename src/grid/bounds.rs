use serde::{Serialize, Deserialize};
use crate::core::{CellIndex, Coord};

/// Axis-aligned bounding rectangle of a set of cells, in grid row/col space.
/// `width` and `height` are inclusive cell counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
    pub width: usize,
    pub height: usize,
}

impl BoundingRect {
    pub fn from_coords(coords: impl IntoIterator<Item = Coord>) -> Option<Self> {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let (mut min_row, mut max_row) = (first.row, first.row);
        let (mut min_col, mut max_col) = (first.col, first.col);
        for c in iter {
            min_row = min_row.min(c.row);
            max_row = max_row.max(c.row);
            min_col = min_col.min(c.col);
            max_col = max_col.max(c.col);
        }
        Some(Self {
            min_row,
            max_row,
            min_col,
            max_col,
            width: max_col - min_col + 1,
            height: max_row - min_row + 1,
        })
    }

    pub fn from_indices(indices: &[CellIndex]) -> Option<Self> {
        Self::from_coords(indices.iter().map(|&i| Coord::from_index(i)))
    }

    pub fn origin(&self) -> Coord {
        Coord::new(self.min_row, self.min_col)
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, c: Coord) -> bool {
        c.row >= self.min_row && c.row <= self.max_row && c.col >= self.min_col && c.col <= self.max_col
    }
}
