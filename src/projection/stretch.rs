// Stretch-fill: every cell of a group shows a slice of one image that is
// scaled to the group's bounding rectangle. Each cell gets a background
// position that spreads linearly from 0% to 100% across the rectangle.

use serde::Serialize;
use crate::core::CellIndex;
use crate::grid::{BoundingRect, Group};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    pub index: CellIndex,
    pub x_percent: f64,
    pub y_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StretchProjection {
    pub samples: Vec<SamplePoint>,
}

impl StretchProjection {
    pub fn sample(&self, index: CellIndex) -> Option<&SamplePoint> {
        self.samples.iter().find(|s| s.index == index)
    }
}

/// Image size relative to one cell, in percent per axis.
pub fn background_size(rect: &BoundingRect) -> (f64, f64) {
    (rect.width as f64 * 100.0, rect.height as f64 * 100.0)
}

fn spread(offset: usize, extent: usize) -> f64 {
    if extent > 1 { offset as f64 / (extent - 1) as f64 * 100.0 } else { 50.0 }
}

pub fn project_stretch(group: &Group, rect: &BoundingRect) -> StretchProjection {
    let samples = group.coords()
        .map(|c| SamplePoint {
            index: c.to_index(),
            x_percent: spread(c.col - rect.min_col, rect.width),
            y_percent: spread(c.row - rect.min_row, rect.height),
        })
        .collect();
    StretchProjection { samples }
}
