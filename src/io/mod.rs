/// Command-line interface and batch orchestration
pub mod cli;
/// Generator constants and defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// PNG encoding and export
pub mod image;
/// Batch progress display
pub mod progress;
