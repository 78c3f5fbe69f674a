//! Coherent noise sampling for texture turbulence
//!
//! Textures only see the [`Noise2D`] trait. [`LayeredPerlin`] is the stock
//! implementation: several octaves of gradient noise summed with decaying
//! amplitude and doubling frequency.

use crate::io::configuration::{
    NOISE_AMPLITUDE, NOISE_FREQUENCY, NOISE_OCTAVES, NOISE_PERSISTENCE,
};
use crate::io::error::{Result, invalid_parameter, noise_error};
use noise::{NoiseFn, Perlin};

/// Deterministic coherent noise over the plane
pub trait Noise2D {
    /// Sample the noise field at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error if the field cannot be evaluated at the coordinate
    fn sample(&self, x: f64, y: f64) -> Result<f64>;
}

impl<F> Noise2D for F
where
    F: Fn(f64, f64) -> Result<f64>,
{
    fn sample(&self, x: f64, y: f64) -> Result<f64> {
        self(x, y)
    }
}

/// Octave layering parameters for [`LayeredPerlin`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    /// Number of summed noise layers
    pub octaves: u32,
    /// Amplitude multiplier applied per octave
    pub persistence: f64,
    /// Spatial frequency of the first octave
    pub frequency: f64,
    /// Amplitude of the first octave
    pub amplitude: f64,
    /// Permutation seed of the underlying gradient noise
    pub seed: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            octaves: NOISE_OCTAVES,
            persistence: NOISE_PERSISTENCE,
            frequency: NOISE_FREQUENCY,
            amplitude: NOISE_AMPLITUDE,
            seed: 0,
        }
    }
}

impl NoiseConfig {
    /// Reference configuration with a different permutation seed
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Check the configuration describes a usable noise field
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `octaves` is zero
    /// - `frequency` is not a positive finite number
    /// - `persistence` or `amplitude` is not finite
    pub fn validate(&self) -> Result<()> {
        if self.octaves == 0 {
            return Err(invalid_parameter(
                "octaves",
                &self.octaves,
                &"at least one octave is required",
            ));
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(invalid_parameter(
                "frequency",
                &self.frequency,
                &"must be a positive finite number",
            ));
        }
        if !self.persistence.is_finite() {
            return Err(invalid_parameter(
                "persistence",
                &self.persistence,
                &"must be finite",
            ));
        }
        if !self.amplitude.is_finite() {
            return Err(invalid_parameter(
                "amplitude",
                &self.amplitude,
                &"must be finite",
            ));
        }
        Ok(())
    }
}

/// Multi-octave Perlin noise
#[derive(Clone, Debug)]
pub struct LayeredPerlin {
    perlin: Perlin,
    config: NoiseConfig,
}

impl Default for LayeredPerlin {
    fn default() -> Self {
        let config = NoiseConfig::default();
        Self {
            perlin: Perlin::new(config.seed),
            config,
        }
    }
}

impl LayeredPerlin {
    /// Create a layered noise field from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`NoiseConfig::validate`]
    pub fn new(config: NoiseConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            perlin: Perlin::new(config.seed),
            config,
        })
    }

    /// Layering parameters in use
    pub const fn config(&self) -> &NoiseConfig {
        &self.config
    }
}

impl Noise2D for LayeredPerlin {
    fn sample(&self, x: f64, y: f64) -> Result<f64> {
        if !x.is_finite() || !y.is_finite() {
            return Err(noise_error(x, y, &"coordinates must be finite"));
        }

        let mut sum = 0.0;
        let mut frequency = self.config.frequency;
        let mut amplitude = self.config.amplitude;

        for _ in 0..self.config.octaves {
            sum += self.perlin.get([x * frequency, y * frequency]) * amplitude;
            frequency *= 2.0;
            amplitude *= self.config.persistence;
        }

        if sum.is_finite() {
            Ok(sum)
        } else {
            Err(noise_error(x, y, &"octave sum diverged"))
        }
    }
}
