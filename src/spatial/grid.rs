//! Grid geometry and the probabilistic half-grid builder
//!
//! Only the left `grid_size / 2` columns are decided at random. The painter
//! mirrors them onto the right half, so the builder never sees that half.

use ndarray::Array2;
use rand::Rng;

use crate::math::distance::Shape;

/// Square grid dimensions shared by every stage of a generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    grid_size: usize,
    cell_size: u32,
}

impl GridGeometry {
    /// Describe a `grid_size` x `grid_size` grid of `cell_size` pixel cells
    ///
    /// No validation happens here; `AvatarGenerator::new` rejects unusable sizes.
    pub const fn new(grid_size: usize, cell_size: u32) -> Self {
        Self {
            grid_size,
            cell_size,
        }
    }

    /// Number of cells along each side
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Side length of one cell in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Number of independently decided columns
    pub const fn half_width(&self) -> usize {
        self.grid_size / 2
    }

    /// Real-valued grid center as `[cx, cy]`
    pub fn center(&self) -> [f64; 2] {
        let center = self.grid_size as f64 / 2.0;
        [center, center]
    }

    /// Distance past which circle and diamond cells are never filled
    pub const fn cutoff_radius(&self) -> usize {
        self.grid_size / 2 + 1
    }

    /// Side length of the rendered image in pixels
    pub const fn image_side(&self) -> u32 {
        self.grid_size as u32 * self.cell_size
    }

    /// Column that mirrors `x` across the vertical center line
    pub const fn mirrored_column(&self, x: usize) -> usize {
        self.grid_size - 1 - x
    }

    /// Check that a signed cell coordinate lies on the grid
    pub const fn contains(&self, x: i64, y: i64) -> bool {
        let size = self.grid_size as i64;
        x >= 0 && y >= 0 && x < size && y < size
    }
}

/// Decide whether the half-grid cell at `(x, y)` is filled
///
/// Cells beyond the radius cutoff of circle and diamond shapes return `false`
/// without consuming a draw. Otherwise the fill probability is
/// `1 - distance / grid_size`; it may go negative, in which case the draw
/// still happens and simply never succeeds, keeping seeded streams aligned.
pub fn fill_likelihood<R: Rng + ?Sized>(
    geometry: &GridGeometry,
    x: usize,
    y: usize,
    shape: Shape,
    rng: &mut R,
) -> bool {
    let distance = shape.distance([x as f64, y as f64], geometry.center(), rng);

    if shape.has_radius_cutoff() && distance > geometry.cutoff_radius() as f64 {
        return false;
    }

    let fill_probability = 1.0 - distance / geometry.grid_size() as f64;
    rng.random::<f64>() < fill_probability
}

/// Fill decisions for the left half of the grid, indexed `[row, col]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HalfGrid {
    cells: Array2<bool>,
}

impl HalfGrid {
    /// Wrap a `[rows, cols]` boolean array
    pub const fn from_array(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    /// Roll every half-grid cell in row-major order
    pub fn build<R: Rng + ?Sized>(geometry: &GridGeometry, shape: Shape, rng: &mut R) -> Self {
        let rows = geometry.grid_size();
        let cols = geometry.half_width();
        let mut cells = Array2::from_elem((rows, cols), false);

        for y in 0..rows {
            for x in 0..cols {
                let filled = fill_likelihood(geometry, x, y, shape, rng);
                if let Some(cell) = cells.get_mut([y, x]) {
                    *cell = filled;
                }
            }
        }

        Self { cells }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Fill state at column `x`, row `y`; out-of-range cells read as empty
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.cells.get([y, x]).copied().unwrap_or(false)
    }

    /// Number of filled half-grid cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Filled cells as `[x, y]`, row-major
    pub fn filled_cells(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &filled)| filled)
            .map(|((y, x), _)| [x, y])
    }

    /// Underlying `[row, col]` array
    pub const fn as_array(&self) -> &Array2<bool> {
        &self.cells
    }
}
