//! Raster canvas and the mirrored pixel painter

use crate::generation::palette::Palette;
use crate::spatial::{FilledCellSet, GridGeometry, HalfGrid};
use image::{Rgba, RgbaImage};
use rand::Rng;

/// Background pixel value
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Square RGBA surface addressed in grid cells
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbaImage,
    geometry: GridGeometry,
}

impl Canvas {
    /// Create a fully transparent canvas sized for `geometry`
    pub fn new(geometry: GridGeometry) -> Self {
        let side = geometry.image_side();
        Self {
            image: RgbaImage::from_pixel(side, side, TRANSPARENT),
            geometry,
        }
    }

    /// Grid the canvas is laid out for
    pub const fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Paint the square of cell `(x, y)`
    ///
    /// The square covers pixels `[x * cell, (x + 1) * cell)` on each axis.
    /// Parts that fall outside the canvas are clipped, so cells off the grid
    /// paint nothing.
    pub fn fill_cell(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        let cell = i64::from(self.geometry.cell_size());
        let side = i64::from(self.image.width());

        let clamp = |v: i64| v.clamp(0, side) as u32;
        let (left, right) = (clamp(x * cell), clamp((x + 1) * cell));
        let (top, bottom) = (clamp(y * cell), clamp((y + 1) * cell));

        for py in top..bottom {
            for px in left..right {
                if let Some(pixel) = self.image.get_pixel_mut_checked(px, py) {
                    *pixel = color;
                }
            }
        }
    }

    /// Pixel at the center of cell `(x, y)`, if the cell is on the grid
    pub fn cell_color(&self, x: usize, y: usize) -> Option<Rgba<u8>> {
        let cell = self.geometry.cell_size();
        let px = u32::try_from(x).ok()?.checked_mul(cell)? + cell / 2;
        let py = u32::try_from(y).ok()?.checked_mul(cell)? + cell / 2;
        self.image.get_pixel_checked(px, py).copied()
    }

    /// Borrow the rendered image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take ownership of the rendered image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Paint every filled half-grid cell and its mirror image
///
/// Cells are visited row-major. Each filled cell draws its own color from the
/// weighted palette and its mirror at column `grid_size - 1 - x` reuses that
/// draw. Returns both cells of every pair, so the set is always twice the
/// number of filled half-grid cells.
pub fn draw_pixels<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    grid: &HalfGrid,
    palette: &Palette,
    rng: &mut R,
) -> FilledCellSet {
    let geometry = *canvas.geometry();
    let mut filled = FilledCellSet::new(geometry.grid_size());

    for [x, y] in grid.filled_cells() {
        let color = palette.pick(rng).to_rgba();
        let mirrored_x = geometry.mirrored_column(x);

        canvas.fill_cell(x as i64, y as i64, color);
        filled.insert(x, y);

        canvas.fill_cell(mirrored_x as i64, y as i64, color);
        filled.insert(mirrored_x, y);
    }

    filled
}
