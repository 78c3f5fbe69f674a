//! Texture generators producing intensity grids
//!
//! A generator is configured, optionally reseeded with
//! [`TextureGenerator::reset`], and then asked for any number of grids.

/// Marble texture from noise-perturbed sinusoidal banding
pub mod marble;

pub use marble::MarbleTexture;

use crate::io::error::Result;
use ndarray::Array2;

/// Dense grayscale intensities indexed by `[row, col]`, each in `[0, 1]`
pub type TextureGrid = Array2<f64>;

/// Procedural texture capability
pub trait TextureGenerator {
    /// Generate a fresh `height x width` texture
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or a sampling
    /// collaborator fails
    fn generate(&self, width: i32, height: i32) -> Result<TextureGrid>;

    /// Reseed so later textures differ from earlier ones
    ///
    /// # Errors
    ///
    /// Returns an error if the random collaborator fails
    fn reset(&mut self) -> Result<()>;
}
