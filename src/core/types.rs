use std::fmt;
use serde::{Serialize, Deserialize};

pub type CellIndex = u16;

pub const GRID_SIDE: usize = 100;
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

pub fn is_valid_index(index: CellIndex) -> bool {
    (index as usize) < GRID_CELLS
}

/// Narrow a configured block number to a cell index, `None` when it is off the grid.
pub fn cell_from_raw(raw: i64) -> Option<CellIndex> {
    if (0..GRID_CELLS as i64).contains(&raw) { Some(raw as CellIndex) } else { None }
}

/// Row/column position on the square grid. Row-major: `index = row * GRID_SIDE + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: CellIndex) -> Self {
        let i = index as usize;
        Self { row: i / GRID_SIDE, col: i % GRID_SIDE }
    }

    pub fn to_index(self) -> CellIndex {
        (self.row * GRID_SIDE + self.col) as CellIndex
    }

    pub fn in_bounds(self) -> bool {
        self.row < GRID_SIDE && self.col < GRID_SIDE
    }

    /// In-bounds 4-neighbors, in up, down, left, right order.
    pub fn neighbors4(self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self;
        [(-1i32, 0i32), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| {
                let nr = row as i32 + dr;
                let nc = col as i32 + dc;
                if nr >= 0 && nr < GRID_SIDE as i32 && nc >= 0 && nc < GRID_SIDE as i32 {
                    Some(Coord::new(nr as usize, nc as usize))
                } else {
                    None
                }
            })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
