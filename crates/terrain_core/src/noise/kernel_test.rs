//! Tests for the hash lattice and value noise.

use super::{smooth_interpolate, NoiseContext, PERMUTATION};

#[test]
fn test_hash_lattice_matches_table_lookup() {
  let noise = NoiseContext::new(42);
  for (ix, iy) in [(0i64, 0i64), (3, 7), (255, 255), (100, 12)] {
    let row = ((iy + 42) % 256) as usize;
    let expected = PERMUTATION[(PERMUTATION[row] as usize + ix as usize) % 256];
    assert_eq!(noise.hash_lattice(ix, iy), expected, "at ({}, {})", ix, iy);
  }
}

#[test]
fn test_hash_lattice_wraps_large_coordinates() {
  let noise = NoiseContext::new(7);
  assert_eq!(noise.hash_lattice(3, 5), noise.hash_lattice(3 + 256 * 40, 5 - 256 * 9));
  assert_eq!(noise.hash_lattice(-1, -1), noise.hash_lattice(255, 255));
  // Must not panic at the extremes
  let _ = noise.hash_lattice(i64::MAX, i64::MIN);
}

#[test]
fn test_hash_lattice_deterministic() {
  let a = NoiseContext::new(1337);
  let b = NoiseContext::new(1337);
  for i in -50..50 {
    assert_eq!(a.hash_lattice(i, i * 3), b.hash_lattice(i, i * 3));
  }
}

#[test]
fn test_seed_changes_lattice() {
  let a = NoiseContext::new(1);
  let b = NoiseContext::new(2);
  let differing = (0..64).filter(|&i| a.hash_lattice(i, 0) != b.hash_lattice(i, 0)).count();
  assert!(differing > 0, "seeds 1 and 2 produced identical rows");
}

#[test]
fn test_smooth_interpolate_endpoints_exact() {
  let pairs = [(0.1f32, 0.7f32), (-3.25, 1e6), (208.0, 34.0), (f32::MIN_POSITIVE, -0.0)];
  for (a, b) in pairs {
    assert_eq!(smooth_interpolate(a, b, 0.0), a);
    assert_eq!(smooth_interpolate(a, b, 1.0), b);
  }
}

#[test]
fn test_smooth_interpolate_midpoint() {
  assert_eq!(smooth_interpolate(0.0, 10.0, 0.5), 5.0);
  // Eased weight stays below linear in the first half
  assert!(smooth_interpolate(0.0, 1.0, 0.25) < 0.25);
}

/// At lattice corners value noise equals the hash value exactly.
#[test]
fn test_value_noise_at_corners_equals_hash() {
  let noise = NoiseContext::new(42);
  for ix in -3..6i64 {
    for iy in -3..6i64 {
      let v = noise.value_noise(ix as f32, iy as f32);
      assert_eq!(v, noise.hash_lattice(ix, iy) as f32, "corner ({}, {})", ix, iy);
    }
  }
}

/// Inside a cell, value noise is the smooth blend of its four corners.
#[test]
fn test_value_noise_blends_cell_corners() {
  let noise = NoiseContext::new(9);
  let (x, y) = (12.3f32, 40.8f32);
  let s = noise.hash_lattice(12, 40) as f32;
  let t = noise.hash_lattice(13, 40) as f32;
  let u = noise.hash_lattice(12, 41) as f32;
  let v = noise.hash_lattice(13, 41) as f32;
  let fx = x - 12.0;
  let fy = y - 40.0;
  let expected = smooth_interpolate(smooth_interpolate(s, t, fx), smooth_interpolate(u, v, fx), fy);
  assert_eq!(noise.value_noise(x, y), expected);
}

#[test]
fn test_value_noise_range_and_continuity() {
  let noise = NoiseContext::new(5);
  let mut x = -20.0f32;
  while x < 20.0 {
    let v = noise.value_noise(x, 0.37 * x);
    assert!((0.0..=255.0).contains(&v), "value {} out of range at x={}", v, x);
    x += 0.173;
  }

  // Crossing a lattice line (including zero) does not jump
  for edge in [-1.0f32, 0.0, 1.0, 17.0] {
    let below = noise.value_noise(edge - 1e-3, 0.5);
    let above = noise.value_noise(edge + 1e-3, 0.5);
    assert!((below - above).abs() < 1.0, "jump at x={}: {} vs {}", edge, below, above);
  }
}

#[test]
fn test_value_noise_non_finite_inputs_are_finite() {
  let noise = NoiseContext::new(3);
  for (x, y) in [
    (f32::NAN, 1.0),
    (f32::INFINITY, f32::NEG_INFINITY),
    (1e30, -1e30),
    (f32::MAX, f32::MIN),
  ] {
    assert!(noise.value_noise(x, y).is_finite(), "non-finite at ({}, {})", x, y);
  }
}
