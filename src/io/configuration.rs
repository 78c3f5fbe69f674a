//! Texture constants and runtime configuration defaults

// Marble banding parameters
/// Default period of the sinusoid along the x axis
pub const DEFAULT_X_PERIOD: f64 = 5.0;
/// Default period of the sinusoid along the y axis
pub const DEFAULT_Y_PERIOD: f64 = 10.0;
/// Smallest accepted period; lower values are raised to this
pub const MIN_PERIOD: f64 = 2.0;

/// Exclusive upper bound of the noise seed offset drawn on reset
pub const SEED_OFFSET_BOUND: u32 = 5000;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed texture dimension
pub const MAX_TEXTURE_DIMENSION: usize = 10_000;

// Reference layered Perlin parameters used for marble turbulence
/// Number of summed noise layers
pub const NOISE_OCTAVES: u32 = 2;
/// Amplitude decay per octave
pub const NOISE_PERSISTENCE: f64 = 0.65;
/// Base spatial frequency of the first octave
pub const NOISE_FREQUENCY: f64 = 1.0 / 32.0;
/// Amplitude of the first octave
pub const NOISE_AMPLITUDE: f64 = 1.0;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default output width in pixels
pub const DEFAULT_WIDTH: i32 = 256;
/// Default output height in pixels
pub const DEFAULT_HEIGHT: i32 = 256;
/// Default number of textures produced per run
pub const DEFAULT_COUNT: usize = 1;
/// Default output file
pub const DEFAULT_OUTPUT: &str = "marble.png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
