use super::*;

#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  assert!(!aabb.is_valid());

  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, -2.0, -3.0]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert!(aabb.is_valid());
  assert_eq!(aabb.height(), 4.0);
}

#[test]
fn test_mesh_buffers_split_streams() {
  let vertices = [
    TerrainVertex {
      position: [0.0, 1.0, 2.0],
      color: [0.5, 0.5, 0.5, 1.0],
      tex_coord: [1.0, 0.0],
    },
    TerrainVertex::default(),
    TerrainVertex {
      position: [3.0, 4.0, 5.0],
      ..TerrainVertex::default()
    },
  ];
  let buffers = MeshBuffers::from_vertices(&vertices, &[0, 1, 2]);

  assert_eq!(buffers.vertex_count(), 3);
  assert_eq!(buffers.triangle_count(), 1);
  assert_eq!(buffers.positions[2], [3.0, 4.0, 5.0]);
  assert_eq!(buffers.colors[0], [0.5, 0.5, 0.5, 1.0]);
  assert_eq!(buffers.tex_coords[0], [1.0, 0.0]);
  assert!(!buffers.is_empty());
  assert!(MeshBuffers::default().is_empty());
}
