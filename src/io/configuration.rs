//! Generator constants and runtime configuration defaults

// Grid geometry
/// Default number of cells along each side of the square grid
pub const DEFAULT_GRID_SIZE: usize = 20;
/// Default side length of one cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 32;

// "Lost Century" palette, https://lospec.com/palette-list/lost-century
/// Candidate colors the palette picker draws from
pub const DEFAULT_COLORS: [&str; 11] = [
    "#8caba1", "#b3a555", "#ae5d40", "#4b726e", "#c77b58", "#79444a", "#d1b187", "#77743b",
    "#847875", "#927441", "#d2c9a5",
];

/// Border color painted around every filled region
pub const DEFAULT_OUTLINE_COLOR: &str = "#4b3d44";

// Palette weighting: every filled cell draws independently from a 4:2:1 list
/// Copies of the dominant color in the weighted palette
pub const MAIN_COLOR_WEIGHT: usize = 4;
/// Copies of the first accent color in the weighted palette
pub const SECONDARY_COLOR_WEIGHT: usize = 2;
/// Copies of the second accent color in the weighted palette
pub const TERTIARY_COLOR_WEIGHT: usize = 1;
/// Length of the weighted palette list
pub const PALETTE_LENGTH: usize = MAIN_COLOR_WEIGHT + SECONDARY_COLOR_WEIGHT + TERTIARY_COLOR_WEIGHT;

/// Minimum number of distinct candidate colors
pub const MIN_DISTINCT_COLORS: usize = 3;

// A 10_000 pixel RGBA canvas is already ~400 MB
/// Maximum allowed output image side in pixels
pub const MAX_IMAGE_SIDE: u64 = 10_000;

// Batch defaults
/// Fixed seed for reproducible batches
pub const DEFAULT_SEED: u64 = 42;
/// Number of avatars generated by one batch run
pub const DEFAULT_COUNT: usize = 100;
/// Directory that receives batch output
pub const DEFAULT_OUTPUT_DIR: &str = "creatures";

// Output settings
/// Prefix of every generated file name
pub const OUTPUT_PREFIX: &str = "creature_";
/// Extension of every generated file name
pub const OUTPUT_EXTENSION: &str = "png";
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
