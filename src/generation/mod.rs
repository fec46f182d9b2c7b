/// Top-level avatar generator and configuration
pub mod generator;
/// Border drawing around filled regions
pub mod outline;
/// Raster canvas and mirrored cell painting
pub mod painter;
/// Colors and weighted palette selection
pub mod palette;

pub use generator::{Avatar, AvatarGenerator, GeneratorConfig};
pub use palette::{Color, ColorSet, Palette};
