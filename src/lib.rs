//! Procedural marble texture generation
//!
//! A marble texture is a periodic sinusoidal banding whose phase is perturbed
//! by coherent noise, producing irregular vein-like stripes. Generators produce
//! grids of intensities in `[0, 1]` that can be exported as grayscale images.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Noise and random collaborators consumed by texture generators
pub mod sampling;
/// Texture generator capability and the marble implementation
pub mod texture;

pub use io::error::{Result, TextureError};
pub use texture::{MarbleTexture, TextureGenerator, TextureGrid};
