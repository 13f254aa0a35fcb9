//! Seeded hash lattice and smoothed value noise.

/// Fixed permutation table shared by every terrain.
#[rustfmt::skip]
pub const PERMUTATION: [u8; 256] = [
  208, 34, 231, 213, 32, 248, 233, 56, 161, 78, 24, 140, 71, 48, 140, 254, 245, 255, 247, 247, 40,
  185, 248, 251, 245, 28, 124, 204, 204, 76, 36, 1, 107, 28, 234, 163, 202, 224, 245, 128, 167, 204,
  9, 92, 217, 54, 239, 174, 173, 102, 193, 189, 190, 121, 100, 108, 167, 44, 43, 77, 180, 204, 8, 81,
  70, 223, 11, 38, 24, 254, 210, 210, 177, 32, 81, 195, 243, 125, 8, 169, 112, 32, 97, 53, 195, 13,
  203, 9, 47, 104, 125, 117, 114, 124, 165, 203, 181, 235, 193, 206, 70, 180, 174, 0, 167, 181, 41,
  164, 30, 116, 127, 198, 245, 146, 87, 224, 149, 206, 57, 4, 192, 210, 65, 210, 129, 240, 178, 105,
  228, 108, 245, 148, 140, 40, 35, 195, 38, 58, 65, 207, 215, 253, 65, 85, 208, 76, 62, 3, 237, 55, 89,
  232, 50, 217, 64, 244, 157, 199, 121, 252, 90, 17, 212, 203, 149, 152, 140, 187, 234, 177, 73, 174,
  193, 100, 192, 143, 97, 53, 145, 135, 19, 103, 13, 90, 135, 151, 199, 91, 239, 247, 33, 39, 145,
  101, 120, 99, 3, 186, 86, 99, 41, 237, 203, 111, 79, 220, 135, 158, 42, 30, 154, 120, 67, 87, 167,
  135, 176, 183, 191, 253, 115, 184, 21, 233, 58, 129, 233, 142, 39, 128, 211, 118, 137, 139, 255,
  114, 20, 218, 113, 154, 27, 127, 246, 250, 1, 8, 198, 250, 209, 92, 222, 173, 21, 88, 102, 219,
];

/// Immutable noise state: a permutation table and the world seed mixed
/// into every lattice lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoiseContext {
  table: [u8; 256],
  seed: u32,
}

impl NoiseContext {
  /// Context over the fixed `PERMUTATION` table.
  pub fn new(seed: u32) -> Self {
    Self::with_table(PERMUTATION, seed)
  }

  pub fn with_table(table: [u8; 256], seed: u32) -> Self {
    Self { table, seed }
  }

  #[inline]
  pub fn seed(&self) -> u32 {
    self.seed
  }

  /// `table[(table[(iy + seed) mod 256] + ix) mod 256]`.
  ///
  /// Both index computations use the Euclidean remainder, so any integer
  /// lattice coordinate (including negative ones) is valid.
  #[inline]
  pub fn hash_lattice(&self, ix: i64, iy: i64) -> u8 {
    let row = iy.wrapping_add(self.seed as i64).rem_euclid(256) as usize;
    let col = (self.table[row] as i64).wrapping_add(ix).rem_euclid(256) as usize;
    self.table[col]
  }

  /// Smoothed value noise in `[0, 255]`.
  ///
  /// Splits `(x, y)` into the containing lattice cell and the fractional
  /// offset inside it, then blends the four corner hashes with
  /// `smooth_interpolate`, first along x and then along y. Non-finite
  /// coordinates sample the origin cell.
  pub fn value_noise(&self, x: f32, y: f32) -> f32 {
    let x = if x.is_finite() { x } else { 0.0 };
    let y = if y.is_finite() { y } else { 0.0 };

    let x_floor = x.floor();
    let y_floor = y.floor();
    // Saturating float -> int casts keep huge inputs well defined
    let x_int = x_floor as i64;
    let y_int = y_floor as i64;
    let x_frac = x - x_floor;
    let y_frac = y - y_floor;

    let s = self.hash_lattice(x_int, y_int) as f32;
    let t = self.hash_lattice(x_int.wrapping_add(1), y_int) as f32;
    let u = self.hash_lattice(x_int, y_int.wrapping_add(1)) as f32;
    let v = self.hash_lattice(x_int.wrapping_add(1), y_int.wrapping_add(1)) as f32;

    let low = smooth_interpolate(s, t, x_frac);
    let high = smooth_interpolate(u, v, x_frac);
    smooth_interpolate(low, high, y_frac)
  }
}

/// Interpolate `a..b` with the C¹ weight `t²(3 − 2t)`.
///
/// Written as `a·(1 − w) + b·w` so that `t = 0` yields exactly `a` and
/// `t = 1` yields exactly `b`.
#[inline]
pub fn smooth_interpolate(a: f32, b: f32, t: f32) -> f32 {
  let w = t * t * (3.0 - 2.0 * t);
  a * (1.0 - w) + b * w
}

#[cfg(test)]
#[path = "kernel_test.rs"]
mod kernel_test;
