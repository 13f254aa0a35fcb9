use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

#[test]
fn test_jitter_reproducible_per_seed() {
  assert_eq!(ColorJitter::from_seed(42), ColorJitter::from_seed(42));
  let varied = (0..20).any(|seed| ColorJitter::from_seed(seed) != ColorJitter::from_seed(seed + 1));
  assert!(varied);
}

#[test]
fn test_jitter_range() {
  for seed in 0..200 {
    for factor in ColorJitter::from_seed(seed).0 {
      assert!((0.5..1.5).contains(&factor), "seed {} factor {}", seed, factor);
      // Steps of 0.01
      let steps = (factor - 0.5) * 100.0;
      assert!((steps - steps.round()).abs() < 1e-3);
    }
  }
}

#[test]
fn test_base_color_range() {
  let mut rng = ChaCha8Rng::seed_from_u64(7);
  for _ in 0..100 {
    for channel in BaseColor::random(&mut rng).0 {
      assert!((0.0..=254.0 / 155.0).contains(&channel));
    }
  }
}

#[test]
fn test_tint_darkens_with_ridge() {
  let base = BaseColor([1.2, 0.8, 0.6]);
  let jitter = ColorJitter([0.5, 1.0, 1.5]);

  assert_eq!(base.tint(&jitter, 0.0), [1.2, 0.8, 0.6, 1.0]);
  let tinted = base.tint(&jitter, 0.4);
  assert!((tinted[0] - 1.0).abs() < 1e-6);
  assert!((tinted[1] - 0.4).abs() < 1e-6);
  assert!((tinted[2] - 0.0).abs() < 1e-6);
  assert_eq!(tinted[3], 1.0);
}
