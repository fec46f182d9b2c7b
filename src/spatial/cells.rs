//! Ordered set of painted cells with constant-time membership

use bitvec::prelude::*;
use std::fmt;

/// Every cell painted during one generation run, original and mirrored
///
/// Keeps insertion order for iteration and a row-major occupancy mask for
/// O(1) neighbor lookups. Lookups take signed coordinates so neighbors that
/// fall off the grid simply report as empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilledCellSet {
    cells: Vec<[usize; 2]>,
    mask: BitVec,
    grid_size: usize,
}

impl FilledCellSet {
    /// Create an empty set for a `grid_size` x `grid_size` grid
    pub fn new(grid_size: usize) -> Self {
        Self {
            cells: Vec::new(),
            mask: bitvec![0; grid_size * grid_size],
            grid_size,
        }
    }

    /// Record cell `(x, y)`
    ///
    /// Returns `false` if the cell was already present or lies off the grid.
    pub fn insert(&mut self, x: usize, y: usize) -> bool {
        let Some(index) = self.index_of(x as i64, y as i64) else {
            return false;
        };
        if self.mask.get(index).as_deref() == Some(&true) {
            return false;
        }
        self.mask.set(index, true);
        self.cells.push([x, y]);
        true
    }

    /// Test membership of a possibly off-grid cell
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.index_of(x, y)
            .is_some_and(|index| self.mask.get(index).as_deref() == Some(&true))
    }

    /// Number of recorded cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test if no cell has been recorded
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Side length of the grid this set indexes
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Recorded cells as `[x, y]`, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
        self.cells.iter().copied()
    }

    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        let size = self.grid_size as i64;
        (x >= 0 && y >= 0 && x < size && y < size).then(|| y as usize * self.grid_size + x as usize)
    }
}

impl fmt::Display for FilledCellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FilledCellSet({} cells: {:?})", self.len(), self.cells)
    }
}
