pub mod error;
pub mod types;

pub use error::{GridError, Result};
pub use types::{CellIndex, Coord, GRID_CELLS, GRID_SIDE, cell_from_raw, is_valid_index};
