/// Command-line parsing and batch orchestration
pub mod cli;
/// Texture constants and defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Grayscale image conversion and PNG export
pub mod image;
/// Batch progress display
pub mod progress;
