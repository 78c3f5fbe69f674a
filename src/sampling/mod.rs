/// Coherent noise fields sampled for turbulence
pub mod noise;
/// Uniform integer sources used for reseeding
pub mod random;

pub use self::noise::{LayeredPerlin, Noise2D, NoiseConfig};
pub use self::random::{RandomSource, SeededRandom};
