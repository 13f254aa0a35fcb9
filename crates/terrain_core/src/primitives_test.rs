use super::*;

#[test]
fn test_cube_layout() {
  let cube = cube_mesh();
  assert_eq!(cube.vertex_count(), 24);
  assert_eq!(cube.colors.len(), 24);
  assert_eq!(cube.tex_coords.len(), 24);
  assert_eq!(cube.triangle_count(), 12);
  assert!(cube.indices.iter().all(|&i| i < 24));

  // Every corner lies on the unit cube
  for p in &cube.positions {
    assert!(p.iter().all(|c| c.abs() == 0.5));
  }
  // Faces are uniformly coloured
  for face in cube.colors.chunks(4) {
    assert!(face.iter().all(|c| *c == face[0]));
  }
}

#[test]
fn test_cube_faces_are_planar() {
  let cube = cube_mesh();
  for face in cube.positions.chunks(4) {
    let constant_axis = (0..3).filter(|&axis| face.iter().all(|p| p[axis] == face[0][axis])).count();
    assert_eq!(constant_axis, 1, "face {:?}", face);
  }
}

#[test]
fn test_cube_top_face_tiles_texture() {
  let cube = cube_mesh();
  let top = &cube.tex_coords[8..12];
  assert!(top.iter().any(|t| *t == [3.0, 3.0]));
}

#[test]
fn test_plane_layout() {
  let plane = plane_mesh();
  assert_eq!(plane.vertex_count(), 4);
  assert_eq!(plane.indices, vec![0, 1, 2, 0, 2, 3]);
  assert!(plane.positions.iter().all(|p| p[2] == 0.0));
  assert_eq!(plane.tex_coords[2], [5.0, 5.0]);
}

#[test]
fn test_prop_kinds() {
  assert_eq!(PropKind::Cube.mesh(), cube_mesh());
  assert_eq!(PropKind::Plane.fallback_pattern(), FallbackPattern::Plane);
  assert_eq!(PropKind::Cube.fallback_pattern(), FallbackPattern::Cube);
}
