//! Height-tinted vertex colours.
//!
//! ```text
//!   colour = base − ridge · jitter     (per channel, alpha = 1)
//! ```
//!
//! `base` is shared by every chunk of a world. `jitter` is drawn once per
//! builder from a generator seeded with the world seed, so every corner of
//! every cell uses the same three factors and only the ridge term varies.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Base terrain colour. Channels may exceed 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseColor(pub [f32; 3]);

impl BaseColor {
  /// Draw each channel as `random(0..255) / 155`.
  pub fn random<R: Rng>(rng: &mut R) -> Self {
    let mut channel = || rng.random_range(0..255u32) as f32 / 155.0;
    Self([channel(), channel(), channel()])
  }

  /// Vertex colour at a corner whose ridge component is `ridge`.
  #[inline]
  pub fn tint(&self, jitter: &ColorJitter, ridge: f32) -> [f32; 4] {
    let [r, g, b] = self.0;
    let [q, w, j] = jitter.0;
    [r - ridge * q, g - ridge * w, b - ridge * j, 1.0]
  }
}

/// Per-channel darkening factors, each in `[0.5, 1.5)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorJitter(pub [f32; 3]);

impl ColorJitter {
  /// Three draws from a ChaCha8 generator seeded with `seed`.
  pub fn from_seed(seed: u32) -> Self {
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));
    Self::draw(&mut rng)
  }

  pub fn draw<R: Rng>(rng: &mut R) -> Self {
    let mut factor = || rng.random_range(0..100u32) as f32 / 100.0 + 0.5;
    Self([factor(), factor(), factor()])
  }
}

impl Default for ColorJitter {
  /// Neutral jitter: subtract the ridge term unscaled.
  fn default() -> Self {
    Self([1.0; 3])
  }
}

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;
