//! Mathematical utilities for silhouette generation

/// Distance metrics and shape modes
pub mod distance;
