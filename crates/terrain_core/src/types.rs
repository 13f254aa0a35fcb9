//! Core mesh data types shared by the terrain builder, scene props and
//! render backends.

/// One mesh vertex with every attribute the backend consumes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainVertex {
  /// Model-space position.
  pub position: [f32; 3],

  /// Linear RGBA colour.
  pub color: [f32; 4],

  /// Texture coordinate. Repeats every unit, one unit per grid cell.
  pub tex_coord: [f32; 2],
}

impl Default for TerrainVertex {
  fn default() -> Self {
    Self {
      position: [0.0; 3],
      color: [1.0; 4],
      tex_coord: [0.0; 2],
    }
  }
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }

  pub fn height(&self) -> f32 {
    self.max[1] - self.min[1]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Attribute streams in the layout `RenderBackend::upload_mesh` takes:
/// one parallel array per attribute plus a triangle list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
  pub positions: Vec<[f32; 3]>,
  pub colors: Vec<[f32; 4]>,
  pub tex_coords: Vec<[f32; 2]>,
  /// Triangle indices (3 per triangle) into the attribute streams.
  pub indices: Vec<u32>,
}

impl MeshBuffers {
  /// Split interleaved vertices into per-attribute streams.
  pub fn from_vertices(vertices: &[TerrainVertex], indices: &[u32]) -> Self {
    Self {
      positions: vertices.iter().map(|v| v.position).collect(),
      colors: vertices.iter().map(|v| v.color).collect(),
      tex_coords: vertices.iter().map(|v| v.tex_coord).collect(),
      indices: indices.to_vec(),
    }
  }

  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Returns true if no geometry is present.
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
