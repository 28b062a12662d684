// Region projector.
//
// Maps one image onto one connected group. Two policies share the same
// bounding rectangle: stretch-fill samples the image per cell, cover-fit
// places it once in a container sized to the rectangle.

pub mod cover;
pub mod stretch;

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::core::GridError;
use crate::grid::{BoundingRect, Group};

pub use cover::{ContainerPercent, CoverProjection, project_cover};
pub use stretch::{SamplePoint, StretchProjection, background_size, project_stretch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    Stretch,
    #[default]
    Cover,
}

impl FromStr for FitMode {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stretch" => Ok(FitMode::Stretch),
            "cover" => Ok(FitMode::Cover),
            other => Err(GridError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitMode::Stretch => write!(f, "stretch"),
            FitMode::Cover => write!(f, "cover"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Projection {
    Stretch(StretchProjection),
    Cover(CoverProjection),
}

impl Projection {
    pub fn mode(&self) -> FitMode {
        match self {
            Projection::Stretch(_) => FitMode::Stretch,
            Projection::Cover(_) => FitMode::Cover,
        }
    }
}

/// One image tile on the grid: a group's rectangle plus how the image maps onto it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub rect: BoundingRect,
    pub cells: usize,
    pub projection: Projection,
}

pub fn project(group: &Group, mode: FitMode) -> Region {
    let rect = group.bounds();
    let projection = match mode {
        FitMode::Stretch => Projection::Stretch(project_stretch(group, &rect)),
        FitMode::Cover => Projection::Cover(project_cover(&rect)),
    };
    Region { rect, cells: group.len(), projection }
}
