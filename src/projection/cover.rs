use serde::Serialize;
use crate::core::GRID_SIDE;
use crate::grid::BoundingRect;

/// Group footprint as a percentage-positioned box over the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContainerPercent {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverProjection {
    pub container: ContainerPercent,
}

fn percent_of_side(cells: usize) -> f64 {
    cells as f64 * 100.0 / GRID_SIDE as f64
}

pub fn project_cover(rect: &BoundingRect) -> CoverProjection {
    CoverProjection {
        container: ContainerPercent {
            left: percent_of_side(rect.min_col),
            top: percent_of_side(rect.min_row),
            width: percent_of_side(rect.width),
            height: percent_of_side(rect.height),
        },
    }
}
