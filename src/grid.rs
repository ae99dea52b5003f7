//! Bounded square grid the robots move on.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Side length used when no size is configured.
pub const DEFAULT_GRID_SIZE: i32 = 5;

/// An `N x N` grid with coordinates valid in `[0, N - 1]` on both axes.
///
/// The grid also keeps per-cell occupancy bookkeeping. Occupancy is reserved for a
/// future collision rule: nothing in the crate consults it before placing or moving
/// a robot, so two robots may share a cell.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    size: i32,
    occupied: HashSet<IVec2>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl Grid {
    /// Creates an empty grid of `size x size` cells.
    ///
    /// A non-positive `size` yields a grid with no valid cells.
    pub fn new(size: i32) -> Self {
        Self {
            size,
            occupied: HashSet::new(),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// True iff `0 <= x < N` and `0 <= y < N`.
    pub fn is_within_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.size).contains(&x) && (0..self.size).contains(&y)
    }

    /// Marks a cell occupied. No bounds check.
    pub fn occupy(&mut self, x: i32, y: i32) {
        self.occupied.insert(IVec2::new(x, y));
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.occupied.contains(&IVec2::new(x, y))
    }

    /// Saturates `pos` into the valid coordinate range.
    pub fn clamp(&self, pos: IVec2) -> IVec2 {
        let max = (self.size - 1).max(0);
        pos.clamp(IVec2::ZERO, IVec2::splat(max))
    }
}
