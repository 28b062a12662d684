// Connectivity partitioner.
//
// Splits a sponsor's claimed cells into maximal 4-connected groups.
// Membership tests run against a hash set built from the claim, so the
// traversal is O(n) in the claim size and never touches unclaimed cells.

use std::collections::VecDeque;
use rustc_hash::FxHashSet;
use crate::core::{CellIndex, Coord, is_valid_index};
use super::bounds::BoundingRect;

/// A maximal 4-connected subset of one claim. Cells are kept in BFS discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    cells: Vec<CellIndex>,
    members: FxHashSet<CellIndex>,
}

impl Group {
    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        self.members.contains(&index)
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().map(|&i| Coord::from_index(i))
    }

    /// Groups are never empty, so the rectangle always exists.
    pub fn bounds(&self) -> BoundingRect {
        BoundingRect::from_coords(self.coords())
            .unwrap_or(BoundingRect { min_row: 0, max_row: 0, min_col: 0, max_col: 0, width: 1, height: 1 })
    }
}

/// Partition `claim` into 4-connected groups. Duplicates are ignored and
/// out-of-range indices are skipped. Groups come out in the order their
/// first cell appears in `claim`.
pub fn partition(claim: &[CellIndex]) -> Vec<Group> {
    let members: FxHashSet<CellIndex> = claim.iter().copied().filter(|&i| is_valid_index(i)).collect();
    let mut visited: FxHashSet<CellIndex> = FxHashSet::default();
    let mut groups = Vec::new();

    for &seed in claim {
        if !members.contains(&seed) || visited.contains(&seed) { continue; }

        let mut cells = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(seed);
        visited.insert(seed);

        while let Some(current) = queue.pop_front() {
            cells.push(current);
            for n in Coord::from_index(current).neighbors4() {
                let idx = n.to_index();
                if members.contains(&idx) && visited.insert(idx) {
                    queue.push_back(idx);
                }
            }
        }
        let group_members = cells.iter().copied().collect();
        groups.push(Group { cells, members: group_members });
    }
    groups
}
