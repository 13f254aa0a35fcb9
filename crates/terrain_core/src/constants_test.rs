use super::*;

/// Eye height used by ground collision: 8 - 4.5.
#[test]
fn test_eye_height_matches_clearance() {
  let eye = -VERTICAL_OFFSET - GROUND_CLEARANCE;
  assert_eq!(eye, 3.5);
}

/// A chunk spans 21.6 model units before horizontal scaling.
#[test]
fn test_chunk_model_extent() {
  let extent = CHUNK_SIZE as f32 * CELL_SIZE;
  assert!((extent - 21.6).abs() < 1e-4, "extent was {}", extent);
}

/// One grid unit is 4.8 world units.
#[test]
fn test_grid_unit_in_world() {
  assert!((CELL_SIZE * HORIZONTAL_SCALE - 4.8).abs() < 1e-5);
}

#[test]
fn test_max_chunk_vertex_count_fits_u32() {
  let vertices = (MAX_CHUNK_SIZE * MAX_CHUNK_SIZE * 4) as u64;
  assert!(vertices < u64::from(u32::MAX));
}
