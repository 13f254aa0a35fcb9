//! Height field → renderable chunk mesh.
//!
//! Each grid cell becomes one quad with its own four vertices (no welding
//! between neighbouring cells) and two triangles.
//!
//! ```text
//!   v1 ──────── v0        corner   lattice offset   vertex
//!   │         ╱ │         ──────   ──────────────   ──────
//!   │      ╱    │           0         (0, 0)          v2
//!   │   ╱       │           1         (0, 1)          v1
//!   │╱          │           2         (1, 0)          v3
//!   v2 ──────── v3          3         (1, 1)          v0
//!
//!   +x →   +z ↑            triangles: (v0 v1 v2) (v0 v2 v3)
//! ```
//!
//! Vertex positions are chunk-local: cell `(x, y)` spans
//! `[(x − ½)·cell, (x + ½)·cell]` horizontally, and lattice point `g` of the
//! chunk lands at `(g − ½)·cell`. Elevation comes straight from
//! `HeightField` evaluated at integer world lattice coordinates, so a
//! corner shared by two chunks gets the same height from both.

mod color;
mod texture;

use std::sync::Arc;

use web_time::Instant;

pub use color::{BaseColor, ColorJitter};
pub use texture::{FallbackPattern, TextureImage, TextureSource};

use crate::constants::{CELL_SIZE, CHUNK_SIZE, MAX_CHUNK_SIZE};
use crate::height_field::HeightField;
use crate::types::{MeshBuffers, MinMaxAABB, TerrainVertex};

/// Chunk position in the chunk grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
  pub x: i32,
  pub y: i32,
}

impl ChunkCoord {
  pub const fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }
}

impl std::fmt::Display for ChunkCoord {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// Lattice corner offsets of a cell, in vertex emission order
/// (v0, v1, v2, v3).
const QUAD_CORNERS: [(i64, i64); 4] = [(1, 1), (0, 1), (0, 0), (1, 0)];

/// Triangle list of one quad relative to its first vertex.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// One built terrain tile.
#[derive(Clone, Debug)]
pub struct TerrainChunk {
  pub coord: ChunkCoord,
  /// Cells per side.
  pub size: usize,
  /// Four vertices per cell, cells in row-major order (`y` outer).
  pub vertices: Vec<TerrainVertex>,
  /// Six indices per cell.
  pub indices: Vec<u32>,
  pub texture: Arc<TextureImage>,
  /// Chunk-local bounds of the vertex positions.
  pub bounds: MinMaxAABB,
  pub build_time_us: u64,
}

impl TerrainChunk {
  pub fn cell_count(&self) -> usize {
    self.size * self.size
  }

  /// The four vertices of cell `(x, y)`.
  pub fn cell_vertices(&self, x: usize, y: usize) -> Option<&[TerrainVertex]> {
    if x >= self.size || y >= self.size {
      return None;
    }
    let start = (y * self.size + x) * 4;
    self.vertices.get(start..start + 4)
  }

  pub fn to_buffers(&self) -> MeshBuffers {
    MeshBuffers::from_vertices(&self.vertices, &self.indices)
  }
}

/// Builds chunks from one height field with shared colouring and texture.
///
/// ```ignore
/// let builder = TerrainChunkBuilder::new(&field, base)
///   .with_size(64)
///   .with_texture(Arc::new(texture));
/// let chunk = builder.build(ChunkCoord::new(1, 0));
/// ```
#[derive(Clone, Debug)]
pub struct TerrainChunkBuilder<'a> {
  field: &'a HeightField,
  size: usize,
  cell_size: f32,
  base_color: BaseColor,
  jitter: ColorJitter,
  texture: Arc<TextureImage>,
}

impl<'a> TerrainChunkBuilder<'a> {
  /// Builder with the default chunk size and cell spacing, the terrain
  /// fallback texture and jitter drawn from the field's seed.
  pub fn new(field: &'a HeightField, base_color: BaseColor) -> Self {
    Self {
      field,
      size: CHUNK_SIZE,
      cell_size: CELL_SIZE,
      base_color,
      jitter: ColorJitter::from_seed(field.noise().seed()),
      texture: Arc::new(TextureImage::fallback(FallbackPattern::Terrain)),
    }
  }

  /// Cells per chunk side, clamped to `1..=MAX_CHUNK_SIZE`.
  pub fn with_size(mut self, size: usize) -> Self {
    self.size = size.clamp(1, MAX_CHUNK_SIZE);
    self
  }

  pub fn with_cell_size(mut self, cell_size: f32) -> Self {
    self.cell_size = cell_size;
    self
  }

  pub fn with_jitter(mut self, jitter: ColorJitter) -> Self {
    self.jitter = jitter;
    self
  }

  pub fn with_texture(mut self, texture: Arc<TextureImage>) -> Self {
    self.texture = texture;
    self
  }

  pub fn size(&self) -> usize {
    self.size
  }

  pub fn jitter(&self) -> ColorJitter {
    self.jitter
  }

  /// Build the chunk at `coord`.
  ///
  /// Local cell `(x, y)` samples world lattice corners
  /// `(x + coord.x · size + ix, y + coord.y · size + iy)`.
  #[tracing::instrument(skip_all, name = "chunk::build", fields(chunk = %coord, size = self.size))]
  pub fn build(&self, coord: ChunkCoord) -> TerrainChunk {
    let start = Instant::now();

    let size = self.size;
    let cells = size * size;
    let origin_x = i64::from(coord.x) * size as i64;
    let origin_y = i64::from(coord.y) * size as i64;
    let s = self.cell_size;
    let f = s * 0.5;

    let mut vertices = Vec::with_capacity(cells * 4);
    let mut indices = Vec::with_capacity(cells * 6);
    let mut bounds = MinMaxAABB::empty();

    for y in 0..size {
      for x in 0..size {
        let gx = origin_x + x as i64;
        let gy = origin_y + y as i64;
        let cx = x as f32 * s;
        let cz = y as f32 * s;

        let base = vertices.len() as u32;
        for (ix, iy) in QUAD_CORNERS {
          let sample = self.field.sample_lattice(gx + ix, gy + iy);
          let position = [
            cx + if ix == 1 { f } else { -f },
            sample.elevation(),
            cz + if iy == 1 { f } else { -f },
          ];
          bounds.encapsulate(position);
          vertices.push(TerrainVertex {
            position,
            color: self.base_color.tint(&self.jitter, sample.ridge),
            tex_coord: [(x as i64 + ix) as f32, (y as i64 + iy) as f32],
          });
        }
        indices.extend(QUAD_INDICES.iter().map(|i| base + i));
      }
    }

    let build_time_us = start.elapsed().as_micros() as u64;
    tracing::info!(
      chunk = %coord,
      vertices = vertices.len(),
      indices = indices.len(),
      elapsed_us = build_time_us,
      "chunk built"
    );

    TerrainChunk {
      coord,
      size,
      vertices,
      indices,
      texture: Arc::clone(&self.texture),
      bounds,
      build_time_us,
    }
  }
}
