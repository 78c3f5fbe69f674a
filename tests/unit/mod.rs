//! Unit tests mirroring the `src` layout, with shared collaborator stubs


use marble::io::error::{TextureError, noise_error};
use marble::sampling::{Noise2D, RandomSource};

/// Noise field returning the same value everywhere
struct ConstantNoise(f64);

impl Noise2D for ConstantNoise {
    fn sample(&self, _x: f64, _y: f64) -> marble::Result<f64> {
        Ok(self.0)
    }
}

/// Smooth field that differs between nearby coordinates
struct CoordinateNoise;

impl Noise2D for CoordinateNoise {
    fn sample(&self, x: f64, y: f64) -> marble::Result<f64> {
        Ok((x * 0.37).sin() + (y * 0.11).cos())
    }
}

/// Noise field that cannot be evaluated anywhere
struct FailingNoise;

impl Noise2D for FailingNoise {
    fn sample(&self, x: f64, y: f64) -> marble::Result<f64> {
        Err(noise_error(x, y, &"backend unavailable"))
    }
}

/// Random source that always draws the same value
struct FixedRandom(u32);

impl RandomSource for FixedRandom {
    fn next_int(&mut self, _bound: u32) -> marble::Result<u32> {
        Ok(self.0)
    }
}

/// Random source replaying a fixed sequence, then failing
struct SequenceRandom {
    values: Vec<u32>,
    next: usize,
}

impl SequenceRandom {
    fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_int(&mut self, _bound: u32) -> marble::Result<u32> {
        let value = self
            .values
            .get(self.next)
            .copied()
            .ok_or_else(|| TextureError::Random {
                reason: "sequence exhausted".to_string(),
            })?;
        self.next += 1;
        Ok(value)
    }
}
