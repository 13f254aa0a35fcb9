//! Terrain elevation at integer lattice corners.
//!
//! Elevation combines two noise layers:
//!
//! - **ridge**: folded ridge noise, clamped to 0.9 and squared. Gives the
//!   fine crest lines.
//! - **mass**: low-frequency `perlin2d + 1` raised to `2 · falloff`. Gives
//!   the rolling mountain amplitude, growing with distance from the centre.
//!
//! ```text
//!   falloff = min(4, |p − centre| / 128 · 2.5)
//!   elevation = ridge · mass
//! ```
//!
//! Both the chunk mesher and ground collision query this module with the
//! same grid coordinates, so the rendered surface and the walkable surface
//! are one and the same.

use crate::constants::{
  FALLOFF_GAIN, FALLOFF_MAX, FALLOFF_RADIUS, FLATTEN_BELOW, MASS_FREQUENCY, MASS_OCTAVE_FREQUENCY,
  RIDGE_CLAMP, RIDGE_FREQUENCY,
};
use crate::noise::{perlin2d, ridge_noise, NoiseContext};

/// Height components at one lattice corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightSample {
  /// Clamped and squared ridge term, in `[0, 0.81]`.
  pub ridge: f32,
  /// Mountain mass, already raised to `2 · falloff`. Always ≥ 1.
  pub mass: f32,
  /// Radial falloff in `[0, 4]`.
  pub falloff: f32,
}

impl HeightSample {
  #[inline]
  pub fn elevation(&self) -> f32 {
    self.ridge * self.mass
  }
}

/// Elevation source for one terrain.
#[derive(Clone, Debug)]
pub struct HeightField {
  noise: NoiseContext,
  /// Falloff centre in grid units.
  center: [f32; 2],
}

impl HeightField {
  pub fn new(noise: NoiseContext, center: [f32; 2]) -> Self {
    Self { noise, center }
  }

  pub fn noise(&self) -> &NoiseContext {
    &self.noise
  }

  pub fn center(&self) -> [f32; 2] {
    self.center
  }

  /// Sample at a grid corner relative to an explicit falloff centre.
  ///
  /// Note the axis order: the noise layers are evaluated at
  /// `(world_z, world_x)`.
  pub fn sample_corner(&self, world_x: f32, world_z: f32, center_x: f32, center_z: f32) -> HeightSample {
    let distance = (world_x - center_x).hypot(world_z - center_z);
    let falloff = distance / FALLOFF_RADIUS * FALLOFF_GAIN;
    let falloff = if falloff.is_nan() { FALLOFF_MAX } else { falloff.min(FALLOFF_MAX) };

    let ridge = ridge_noise(&self.noise, world_z * RIDGE_FREQUENCY, world_x * RIDGE_FREQUENCY, 1.0, 1)
      .clamp(0.0, RIDGE_CLAMP);
    let mut ridge = ridge * ridge;

    let base = perlin2d(&self.noise, world_z * MASS_FREQUENCY, world_x * MASS_FREQUENCY, MASS_OCTAVE_FREQUENCY, 1) + 1.0;
    let mass = base.powf(2.0 * falloff);

    if falloff < FLATTEN_BELOW {
      ridge *= 2.0 * falloff;
    }

    HeightSample {
      ridge,
      mass,
      falloff,
    }
  }

  /// Sample at a grid corner relative to this field's centre.
  #[inline]
  pub fn sample(&self, grid_x: f32, grid_z: f32) -> HeightSample {
    self.sample_corner(grid_x, grid_z, self.center[0], self.center[1])
  }

  /// Sample at an integer lattice corner.
  ///
  /// Coordinates are converted from integers, so two chunks that share a
  /// corner always evaluate bit-identical inputs.
  #[inline]
  pub fn sample_lattice(&self, gx: i64, gz: i64) -> HeightSample {
    self.sample(gx as f32, gz as f32)
  }

  #[inline]
  pub fn elevation(&self, gx: i64, gz: i64) -> f32 {
    self.sample_lattice(gx, gz).elevation()
  }

  /// Highest elevation among the four lattice corners of the cell that
  /// contains `(grid_x, grid_z)`.
  pub fn max_cell_elevation(&self, grid_x: f32, grid_z: f32) -> f32 {
    let gx = if grid_x.is_finite() { grid_x.floor() as i64 } else { 0 };
    let gz = if grid_z.is_finite() { grid_z.floor() as i64 } else { 0 };

    let mut highest = f32::NEG_INFINITY;
    for corner in 0..4i64 {
      let ix = corner / 2;
      let iz = corner % 2;
      highest = highest.max(self.elevation(gx.saturating_add(ix), gz.saturating_add(iz)));
    }
    highest
  }
}

#[cfg(test)]
#[path = "height_field_test.rs"]
mod height_field_test;
