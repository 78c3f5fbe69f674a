//! Marble texture synthesis
//!
//! Intensity at column `x`, row `y` is `|sin((x·xf + y·yf + n(x + r, y + r))·π)|`
//! where `xf = x_period / width`, `yf = y_period / height`, `n` is coherent
//! noise and `r` is the seed offset chosen on reset. The noise term bends the
//! otherwise straight diagonal bands into veins.

use crate::io::configuration::{
    DEFAULT_X_PERIOD, DEFAULT_Y_PERIOD, MAX_TEXTURE_DIMENSION, MIN_PERIOD, SEED_OFFSET_BOUND,
};
use crate::io::error::{Result, TextureError, invalid_dimension, noise_error};
use crate::sampling::{LayeredPerlin, Noise2D, RandomSource, SeededRandom};
use crate::texture::{TextureGenerator, TextureGrid};
use log::{debug, trace};
use std::f64::consts::PI;

/// Marble texture generator
///
/// Periods control how many bands cross the texture along each axis and are
/// never below [`MIN_PERIOD`]. The seed offset shifts the sampled region of
/// the noise field, so each [`reset`](TextureGenerator::reset) produces a
/// different texture with the same banding.
#[derive(Debug, Clone)]
pub struct MarbleTexture<N = LayeredPerlin, R = SeededRandom> {
    x_period: f64,
    y_period: f64,
    seed_offset: u32,
    noise: N,
    random: R,
}

impl MarbleTexture {
    /// Default periods with the stock noise field and a seeded random source
    ///
    /// # Errors
    ///
    /// Returns an error if the initial reseed fails
    pub fn seeded(seed: u64) -> Result<Self> {
        Self::new(LayeredPerlin::default(), SeededRandom::new(seed))
    }
}

impl<N, R> MarbleTexture<N, R>
where
    N: Noise2D,
    R: RandomSource,
{
    /// Create a generator with default periods and reseed it
    ///
    /// # Errors
    ///
    /// Returns an error if the initial reseed fails
    pub fn new(noise: N, random: R) -> Result<Self> {
        Self::with_periods(DEFAULT_X_PERIOD, DEFAULT_Y_PERIOD, noise, random)
    }

    /// Create a generator with explicit periods and reseed it
    ///
    /// Periods are clamped the same way as the setters.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial reseed fails
    pub fn with_periods(x_period: f64, y_period: f64, noise: N, random: R) -> Result<Self> {
        let mut texture = Self {
            x_period: clamp_period(x_period),
            y_period: clamp_period(y_period),
            seed_offset: 0,
            noise,
            random,
        };
        texture.reset()?;
        Ok(texture)
    }
}

impl<N, R> MarbleTexture<N, R> {
    /// Period of the banding along the x axis
    pub const fn x_period(&self) -> f64 {
        self.x_period
    }

    /// Set the x period, raising values below [`MIN_PERIOD`]
    pub const fn set_x_period(&mut self, period: f64) {
        self.x_period = clamp_period(period);
    }

    /// Period of the banding along the y axis
    pub const fn y_period(&self) -> f64 {
        self.y_period
    }

    /// Set the y period, raising values below [`MIN_PERIOD`]
    pub const fn set_y_period(&mut self, period: f64) {
        self.y_period = clamp_period(period);
    }

    /// Offset added to both noise coordinates, in `[0, SEED_OFFSET_BOUND)`
    pub const fn seed_offset(&self) -> u32 {
        self.seed_offset
    }

    /// Noise field providing the turbulence
    pub const fn noise(&self) -> &N {
        &self.noise
    }
}

impl<N, R> TextureGenerator for MarbleTexture<N, R>
where
    N: Noise2D,
    R: RandomSource,
{
    fn generate(&self, width: i32, height: i32) -> Result<TextureGrid> {
        let cols = checked_dimension("width", width)?;
        let rows = checked_dimension("height", height)?;

        let x_fact = self.x_period / cols as f64;
        let y_fact = self.y_period / rows as f64;
        let offset = f64::from(self.seed_offset);

        trace!(
            "generating {cols}x{rows} marble texture (periods {}, {}; offset {offset})",
            self.x_period, self.y_period
        );

        let mut grid = TextureGrid::zeros((rows, cols));
        for ((row, col), cell) in grid.indexed_iter_mut() {
            let x = col as f64;
            let y = row as f64;
            let turbulence = self.noise.sample(x + offset, y + offset)?;
            if !turbulence.is_finite() {
                return Err(noise_error(
                    x + offset,
                    y + offset,
                    &format!("non-finite sample {turbulence}"),
                ));
            }
            let phase = x.mul_add(x_fact, y.mul_add(y_fact, turbulence)) * PI;
            *cell = phase.sin().abs().min(1.0);
        }

        Ok(grid)
    }

    fn reset(&mut self) -> Result<()> {
        let offset = self.random.next_int(SEED_OFFSET_BOUND)?;
        if offset >= SEED_OFFSET_BOUND {
            return Err(TextureError::Random {
                reason: format!("offset {offset} outside [0, {SEED_OFFSET_BOUND})"),
            });
        }

        self.seed_offset = offset;
        debug!("reseeded marble texture with noise offset {offset}");
        Ok(())
    }
}

// NaN falls back to the minimum since f64::max ignores it
const fn clamp_period(period: f64) -> f64 {
    MIN_PERIOD.max(period)
}

fn checked_dimension(axis: &'static str, value: i32) -> Result<usize> {
    if value <= 0 {
        return Err(invalid_dimension(
            axis,
            i64::from(value),
            &"must be positive",
        ));
    }

    let size =
        usize::try_from(value).map_err(|e| invalid_dimension(axis, i64::from(value), &e))?;
    if size > MAX_TEXTURE_DIMENSION {
        return Err(invalid_dimension(
            axis,
            i64::from(value),
            &format!("exceeds maximum of {MAX_TEXTURE_DIMENSION}"),
        ));
    }

    Ok(size)
}
