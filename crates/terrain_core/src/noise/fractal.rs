//! Multi-octave sums over value noise.

use super::NoiseContext;

/// Largest value `value_noise` produces plus one, used for normalisation.
const LATTICE_RANGE: f32 = 256.0;

/// Octave sum of value noise, normalised to `[0, 1)`.
///
/// Octave `i` samples at `frequency · 2^i` with amplitude `2^-i`. The sum
/// is divided by `Σ 256 · amplitude` over the octaves actually used, so the
/// output range does not depend on `octaves`. `octaves == 0` yields 0.
pub fn perlin2d(noise: &NoiseContext, x: f32, y: f32, frequency: f32, octaves: u32) -> f32 {
  let mut xa = x * frequency;
  let mut ya = y * frequency;
  let mut amplitude = 1.0;
  let mut total = 0.0;
  let mut weight = 0.0;

  for _ in 0..octaves {
    weight += LATTICE_RANGE * amplitude;
    total += noise.value_noise(xa, ya) * amplitude;
    amplitude *= 0.5;
    xa *= 2.0;
    ya *= 2.0;
  }

  if weight == 0.0 {
    return 0.0;
  }
  total / weight
}

/// Fold `perlin2d` around its midpoint: `2 · (0.5 − |0.5 − e|)`.
///
/// Produces sharp crests where smooth noise crosses 0.5. Result in `[0, 1]`.
pub fn ridge_noise(noise: &NoiseContext, x: f32, y: f32, frequency: f32, octaves: u32) -> f32 {
  let e = perlin2d(noise, x, y, frequency, octaves);
  (2.0 * (0.5 - (0.5 - e).abs())).clamp(0.0, 1.0)
}

/// Turbulence: `perlin2d` at 1×, 2× and 4× the coordinates, weighted
/// 0.5 / 0.25 / 0.125.
pub fn turbulence(noise: &NoiseContext, x: f32, y: f32, frequency: f32, octaves: u32) -> f32 {
  0.5 * perlin2d(noise, x, y, frequency, octaves)
    + 0.25 * perlin2d(noise, 2.0 * x, 2.0 * y, frequency, octaves)
    + 0.125 * perlin2d(noise, 4.0 * x, 4.0 * y, frequency, octaves)
}

#[cfg(test)]
#[path = "fractal_test.rs"]
mod fractal_test;
