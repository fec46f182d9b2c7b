//! Avatar generator orchestrating grid, palette, painter and outline stages

use crate::generation::outline::draw_outline;
use crate::generation::painter::{Canvas, draw_pixels};
use crate::generation::palette::{Color, ColorSet, Palette, pick_colors};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_COLORS, DEFAULT_GRID_SIZE, DEFAULT_OUTLINE_COLOR, MAX_IMAGE_SIDE,
};
use crate::io::error::{Result, invalid_argument, invalid_configuration};
use crate::io::image::{encode_png, save_png};
use crate::math::distance::Shape;
use crate::spatial::{FilledCellSet, GridGeometry, HalfGrid};
use image::RgbaImage;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Raw generator settings, validated by [`AvatarGenerator::new`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Cells along each side of the square grid
    pub grid_size: usize,
    /// Pixels along each side of one cell
    pub cell_size: u32,
    /// Candidate palette colors as `#rrggbb`
    pub colors: Vec<String>,
    /// Border color as `#rrggbb`; must not be a candidate color
    pub outline_color: String,
    /// Reject odd grid sizes, which leave the center column unpainted
    pub strict_mirroring: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            colors: DEFAULT_COLORS.iter().map(ToString::to_string).collect(),
            outline_color: DEFAULT_OUTLINE_COLOR.to_string(),
            strict_mirroring: true,
        }
    }
}

/// One generated creature together with the choices that produced it
#[derive(Clone, Debug)]
pub struct Avatar {
    /// Rendered RGBA image with a transparent background
    pub image: RgbaImage,
    /// Shape the silhouette was built with
    pub shape: Shape,
    /// Palette the cell colors were drawn from
    pub palette: Palette,
    /// Every painted cell, original and mirrored
    pub filled_cells: FilledCellSet,
}

impl Avatar {
    /// Encode the image as PNG bytes
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        encode_png(&self.image)
    }

    /// Write the image as a PNG file, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or the file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        save_png(&self.image, path)
    }
}

/// Validated generator holding the read-only configuration shared by every run
#[derive(Clone, Debug)]
pub struct AvatarGenerator {
    geometry: GridGeometry,
    colors: ColorSet,
    outline_color: Color,
}

impl AvatarGenerator {
    /// Validate `config` and prepare the candidate colors
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `grid_size` or `cell_size` is zero
    /// - `grid_size` is odd while `strict_mirroring` is set
    /// - the rendered image side would exceed the supported maximum
    /// - a color string is malformed
    /// - fewer than three distinct candidate colors are given
    /// - the outline color is also a candidate color
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        if config.grid_size == 0 {
            return Err(invalid_configuration(
                "grid_size",
                &config.grid_size,
                &"must be positive",
            ));
        }
        if config.strict_mirroring && config.grid_size % 2 != 0 {
            return Err(invalid_configuration(
                "grid_size",
                &config.grid_size,
                &"must be even for exact mirroring",
            ));
        }
        if config.cell_size == 0 {
            return Err(invalid_configuration(
                "cell_size",
                &config.cell_size,
                &"must be positive",
            ));
        }

        let side = (config.grid_size as u64).saturating_mul(u64::from(config.cell_size));
        if side > MAX_IMAGE_SIDE {
            return Err(invalid_configuration(
                "grid_size * cell_size",
                &side,
                &format!("image side must not exceed {MAX_IMAGE_SIDE} pixels"),
            ));
        }

        let colors = ColorSet::from_hex(&config.colors)?;
        let outline_color: Color = config.outline_color.parse()?;
        if colors.contains(outline_color) {
            return Err(invalid_configuration(
                "outline_color",
                &outline_color,
                &"must differ from every candidate color",
            ));
        }

        Ok(Self {
            geometry: GridGeometry::new(config.grid_size, config.cell_size),
            colors,
            outline_color,
        })
    }

    /// Grid dimensions
    pub const fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Candidate palette colors
    pub const fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// Border color
    pub const fn outline_color(&self) -> Color {
        self.outline_color
    }

    /// Generate one avatar
    ///
    /// An absent `shape` is drawn from circle, diamond and ellipse; an absent
    /// `main_color` is drawn from the candidate colors. All randomness comes
    /// from `rng`, so a seeded generator reproduces the same image.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AvatarError::InvalidArgument`] if `main_color` is not
    /// a candidate color; nothing is drawn in that case
    pub fn generate_avatar<R: Rng + ?Sized>(
        &self,
        shape: Option<Shape>,
        main_color: Option<Color>,
        rng: &mut R,
    ) -> Result<Avatar> {
        if let Some(color) = main_color.filter(|&c| !self.colors.contains(c)) {
            return Err(invalid_argument(
                "main_color",
                &color,
                &"not one of the candidate colors",
            ));
        }

        let shape = shape.unwrap_or_else(|| Shape::random(rng));
        let grid = HalfGrid::build(&self.geometry, shape, rng);
        let palette = pick_colors(&self.colors, main_color, rng)?;

        let mut canvas = Canvas::new(self.geometry);
        let filled_cells = draw_pixels(&mut canvas, &grid, &palette, rng);
        draw_outline(&mut canvas, &filled_cells, self.outline_color);

        debug!(
            "Generated {shape} avatar: {} cells, palette {} / {} / {}",
            filled_cells.len(),
            palette.main(),
            palette.secondary(),
            palette.tertiary()
        );

        Ok(Avatar {
            image: canvas.into_image(),
            shape,
            palette,
            filled_cells,
        })
    }

    /// Generate the avatars for `indices` in parallel
    ///
    /// Avatar `i` draws from its own stream, [`avatar_rng`]`(seed, i)`, so the
    /// output does not depend on thread scheduling. Results come back in
    /// index order.
    ///
    /// # Errors
    ///
    /// Returns the first error any avatar produced
    pub fn generate_batch(
        &self,
        seed: u64,
        indices: Range<usize>,
        shape: Option<Shape>,
        main_color: Option<Color>,
    ) -> Result<Vec<Avatar>> {
        indices
            .into_par_iter()
            .map(|index| self.generate_avatar(shape, main_color, &mut avatar_rng(seed, index)))
            .collect()
    }
}

/// Independent random stream for batch entry `index`
pub fn avatar_rng(seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(index as u64))
}
