//! Spatial data structures for the creature grid
//!
//! This module contains spatial-related functionality including:
//! - Grid geometry and pixel mapping
//! - The probabilistic half-grid builder
//! - Filled cell tracking for outline lookups

/// Filled cell set with constant-time membership tests
pub mod cells;
/// Grid geometry and half-grid construction
pub mod grid;

pub use cells::FilledCellSet;
pub use grid::{GridGeometry, HalfGrid};
