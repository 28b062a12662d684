use serde::Serialize;
use crate::core::{CellIndex, GRID_CELLS, is_valid_index};

/// What a hover over a single block reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BlockStatus {
    Available,
    Unavailable { sponsor: String },
}

impl BlockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BlockStatus::Available => "Available",
            BlockStatus::Unavailable { .. } => "Unavailable",
        }
    }
}

/// Cell -> owning sponsor map over the whole grid.
#[derive(Debug, Clone)]
pub struct Occupancy {
    owners: Vec<Option<u32>>,
    names: Vec<String>,
}

impl Default for Occupancy {
    fn default() -> Self {
        Self::new()
    }
}

impl Occupancy {
    pub fn new() -> Self {
        Self { owners: vec![None; GRID_CELLS], names: Vec::new() }
    }

    /// Assign `cells` to `sponsor`. Later assignments overwrite earlier ones;
    /// the overwritten cells are returned with their previous owner.
    pub fn assign(&mut self, sponsor: &str, cells: &[CellIndex]) -> Vec<(CellIndex, String)> {
        let id = self.names.len() as u32;
        self.names.push(sponsor.to_string());
        let mut overwritten = Vec::new();
        for &cell in cells {
            if !is_valid_index(cell) { continue; }
            let slot = &mut self.owners[cell as usize];
            if let Some(prev) = *slot {
                if prev != id {
                    overwritten.push((cell, self.names[prev as usize].clone()));
                }
            }
            *slot = Some(id);
        }
        overwritten
    }

    pub fn owner(&self, index: CellIndex) -> Option<&str> {
        self.owners
            .get(index as usize)
            .copied()
            .flatten()
            .map(|id| self.names[id as usize].as_str())
    }

    pub fn status(&self, index: CellIndex) -> BlockStatus {
        match self.owner(index) {
            Some(name) => BlockStatus::Unavailable { sponsor: name.to_string() },
            None => BlockStatus::Available,
        }
    }

    pub fn claimed_count(&self) -> usize {
        self.owners.iter().filter(|o| o.is_some()).count()
    }

    pub fn available_count(&self) -> usize {
        GRID_CELLS - self.claimed_count()
    }
}
