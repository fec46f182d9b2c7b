//! Command-line interface for batch generation of creature avatars

use crate::generation::generator::avatar_rng;
use crate::generation::{AvatarGenerator, Color, GeneratorConfig};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_COLORS, DEFAULT_COUNT, DEFAULT_GRID_SIZE, DEFAULT_OUTLINE_COLOR,
    DEFAULT_OUTPUT_DIR, DEFAULT_SEED, OUTPUT_EXTENSION, OUTPUT_PREFIX,
};
use crate::io::error::{Result, invalid_configuration};
use crate::io::progress::ProgressManager;
use crate::math::distance::Shape;
use clap::Parser;
use log::info;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "creaturegen")]
#[command(
    author,
    version,
    about = "Generate symmetric pixel-art creature avatars"
)]
/// Command-line arguments for the avatar generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of avatars to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Directory that receives the PNG files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Random seed for reproducible batches
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Cells along each side of the grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Pixels along each side of a cell
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Silhouette: circle, diamond, ellipse, ellipse-x or ellipse-y (random if omitted)
    #[arg(long)]
    pub shape: Option<Shape>,

    /// Pin the dominant palette color (must be one of the candidate colors)
    #[arg(short, long)]
    pub main_color: Option<Color>,

    /// Comma-separated candidate colors as #rrggbb
    #[arg(long, value_delimiter = ',')]
    pub colors: Option<Vec<String>>,

    /// Outline color as #rrggbb
    #[arg(long, default_value = DEFAULT_OUTLINE_COLOR)]
    pub outline_color: String,

    /// Write each avatar into a subdirectory named after its dominant color
    #[arg(short = 'G', long)]
    pub group_by_color: bool,

    /// Accept odd grid sizes (the center column stays empty)
    #[arg(long)]
    pub allow_odd: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite avatars that already exist
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generator settings described by these arguments
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            grid_size: self.grid_size,
            cell_size: self.cell_size,
            colors: self.colors.clone().unwrap_or_else(|| {
                DEFAULT_COLORS.iter().map(ToString::to_string).collect()
            }),
            outline_color: self.outline_color.clone(),
            strict_mirroring: !self.allow_odd,
        }
    }
}

/// Counts reported at the end of a batch run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Avatars written to disk
    pub written: usize,
    /// Avatars left untouched because their file already existed
    pub skipped: usize,
}

enum Outcome {
    Written,
    Skipped,
}

/// Generates a numbered batch of avatars and writes them as PNG files
pub struct BatchProcessor {
    cli: Cli,
    generator: AvatarGenerator,
}

impl BatchProcessor {
    /// Validate the arguments and build the generator
    ///
    /// # Errors
    ///
    /// Returns an error if the count is zero or the generator configuration is invalid
    pub fn new(cli: Cli) -> Result<Self> {
        if cli.count == 0 {
            return Err(invalid_configuration("count", &cli.count, &"must be positive"));
        }
        let generator = AvatarGenerator::new(cli.generator_config())?;
        Ok(Self { cli, generator })
    }

    /// Generator shared by every avatar in the batch
    pub const fn generator(&self) -> &AvatarGenerator {
        &self.generator
    }

    /// Generate and write every avatar of the batch
    ///
    /// Avatars are generated in parallel; avatar `i` always uses the stream
    /// seeded with `seed + i`, so reruns reproduce identical files.
    ///
    /// # Errors
    ///
    /// Returns the first generation, encoding or file system error encountered
    pub fn process(&self) -> Result<BatchSummary> {
        let start_time = Instant::now();
        info!(
            "Generating {} avatars into '{}' (seed {})",
            self.cli.count,
            self.cli.output.display(),
            self.cli.seed
        );

        let progress = ProgressManager::new(self.cli.count, self.cli.should_show_progress());

        let outcomes = (0..self.cli.count)
            .into_par_iter()
            .map(|index| -> Result<Outcome> {
                let outcome = self.process_index(index)?;
                progress.advance();
                Ok(outcome)
            })
            .collect::<Result<Vec<_>>>()?;

        let summary = outcomes
            .iter()
            .fold(BatchSummary::default(), |mut summary, outcome| {
                match outcome {
                    Outcome::Written => summary.written += 1,
                    Outcome::Skipped => summary.skipped += 1,
                }
                summary
            });

        progress.finish(summary.written, summary.skipped);
        info!(
            "Finished in {:.2?}: {} written, {} skipped",
            start_time.elapsed(),
            summary.written,
            summary.skipped
        );

        Ok(summary)
    }

    fn process_index(&self, index: usize) -> Result<Outcome> {
        // Ungrouped paths are known up front, so existing files cost no generation
        if !self.cli.group_by_color && self.is_skipped(&self.output_path(index, None)) {
            return Ok(Outcome::Skipped);
        }

        let mut rng = avatar_rng(self.cli.seed, index);
        let avatar =
            self.generator
                .generate_avatar(self.cli.shape, self.cli.main_color, &mut rng)?;

        let output_path = self.output_path(index, Some(avatar.palette.main()));
        if self.is_skipped(&output_path) {
            return Ok(Outcome::Skipped);
        }

        avatar.save(&output_path)?;
        Ok(Outcome::Written)
    }

    fn is_skipped(&self, path: &std::path::Path) -> bool {
        let skipped = self.cli.skip_existing() && path.exists();
        if skipped {
            info!("Skipping: {} (output exists)", path.display());
        }
        skipped
    }

    /// Destination of avatar `index`
    ///
    /// With `--group-by-color` the file lands in a subdirectory named after
    /// the hex digits of `main_color`.
    pub fn output_path(&self, index: usize, main_color: Option<Color>) -> PathBuf {
        let file_name = Self::file_name(index);
        match main_color.filter(|_| self.cli.group_by_color) {
            Some(color) => self.cli.output.join(color.hex_digits()).join(file_name),
            None => self.cli.output.join(file_name),
        }
    }

    /// File name of avatar `index`, e.g. `creature_007.png`
    pub fn file_name(index: usize) -> String {
        format!("{OUTPUT_PREFIX}{index:03}.{OUTPUT_EXTENSION}")
    }
}
