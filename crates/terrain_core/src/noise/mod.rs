//! Hash-lattice value noise and fractal composition.
//!
//! ```text
//!   NoiseContext            (permutation table + seed, immutable)
//!        │
//!        ├── hash_lattice(ix, iy)      integer lattice value in [0, 255]
//!        ├── value_noise(x, y)         smoothed bilinear blend of 4 corners
//!        │
//!        └── fractal
//!              ├── perlin2d            octave sum, normalised to [0, 1)
//!              ├── ridge_noise         2 · (0.5 − |0.5 − e|), folded peaks
//!              └── turbulence          0.5/0.25/0.125 weighted octaves
//! ```
//!
//! Every function is pure over an immutable `NoiseContext`, so several
//! independent terrains can coexist in one process.

mod fractal;
mod kernel;

pub use fractal::{perlin2d, ridge_noise, turbulence};
pub use kernel::{smooth_interpolate, NoiseContext, PERMUTATION};
