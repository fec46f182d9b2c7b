//! Procedural generator for symmetric pixel-art creature avatars
//!
//! A random half-grid is filled with a shape-biased falloff, mirrored across
//! the vertical center line, colored from a weighted three-color palette and
//! finally outlined wherever a filled cell borders an empty one.

#![forbid(unsafe_code)]

/// Palette selection, painting, outlining and the top-level generator
pub mod generation;
/// Input/output operations, configuration and error handling
pub mod io;
/// Distance metrics behind each silhouette shape
pub mod math;
/// Grid geometry, half-grid construction and filled cell tracking
pub mod spatial;

pub use generation::{Avatar, AvatarGenerator, Color, GeneratorConfig, Palette};
pub use io::error::{AvatarError, Result};
pub use math::distance::Shape;
