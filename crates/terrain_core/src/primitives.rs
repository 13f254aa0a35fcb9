//! Static scene props drawn alongside the terrain.
//!
//! ```text
//!      v6----- v5          plane (z = 0):
//!     /|      /|
//!    v1------v0|             v1 ────── v0
//!    | |     | |             │          │
//!    | |v7---|-|v4           │          │
//!    |/      |/              v2 ────── v3
//!    v2------v3
//! ```
//!
//! Both are unit-sized and centred on the origin. The cube has 24 vertices
//! (four per face) so each face carries its own colour and texture
//! coordinates.

use crate::chunk::FallbackPattern;
use crate::types::MeshBuffers;

/// Texture repeats across the cube's top face.
const CUBE_TOP_REPEAT: f32 = 3.0;

/// Texture repeats across the plane.
const PLANE_REPEAT: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropKind {
  Cube,
  Plane,
}

impl PropKind {
  pub fn fallback_pattern(self) -> FallbackPattern {
    match self {
      Self::Cube => FallbackPattern::Cube,
      Self::Plane => FallbackPattern::Plane,
    }
  }

  pub fn mesh(self) -> MeshBuffers {
    match self {
      Self::Cube => cube_mesh(),
      Self::Plane => plane_mesh(),
    }
  }
}

#[rustfmt::skip]
pub fn cube_mesh() -> MeshBuffers {
  let positions = vec![
    [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], // front
    [ 0.5,  0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5], // right
    [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5], [-0.5,  0.5,  0.5], // up
    [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], // left
    [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5], // down
    [ 0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5], // back
  ];

  let n = CUBE_TOP_REPEAT;
  let tex_coords = vec![
    [1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0],
    [0.0, 1.0], [0.0, 0.0], [1.0, 0.0], [1.0, 1.0],
    [n,   0.0], [n,   n  ], [0.0, n  ], [0.0, 0.0],
    [1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0],
    [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0],
    [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0],
  ];

  let face_colors = [
    [0.1, 0.1, 1.0, 1.0],
    [0.1, 1.0, 0.1, 1.0],
    [1.0, 0.1, 0.1, 1.0],
    [1.0, 1.0, 0.1, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [0.1, 1.0, 1.0, 1.0],
  ];
  let colors = face_colors.iter().flat_map(|&c| [c; 4]).collect();

  let indices = (0..6u32)
    .flat_map(|face| [0, 1, 2, 0, 2, 3].map(|i| face * 4 + i))
    .collect();

  MeshBuffers { positions, colors, tex_coords, indices }
}

#[rustfmt::skip]
pub fn plane_mesh() -> MeshBuffers {
  let n = PLANE_REPEAT;
  MeshBuffers {
    positions: vec![[0.5, 0.5, 0.0], [-0.5, 0.5, 0.0], [-0.5, -0.5, 0.0], [0.5, -0.5, 0.0]],
    colors: vec![
      [1.0, 1.0, 0.0, 1.0],
      [0.0, 1.0, 0.0, 1.0],
      [0.0, 0.0, 1.0, 1.0],
      [1.0, 1.0, 0.0, 1.0],
    ],
    tex_coords: vec![[0.0, 0.0], [n, 0.0], [n, n], [0.0, n]],
    indices: vec![0, 1, 2, 0, 2, 3],
  }
}

#[cfg(test)]
#[path = "primitives_test.rs"]
mod primitives_test;
