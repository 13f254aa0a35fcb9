//! Canonical mapping between world space, model space and the height
//! field's grid.
//!
//! ```text
//!   grid g ──(chunk-local)──▶ model  (g − origin − ½) · cell
//!   model  ──(chunk matrix)──▶ world  scale(h, v, h) · translate(t, offset, t)
//!
//!   world_to_grid(w) = w / (cell · h) + centre + ½
//!   surface_height(e) = v · (e + offset)
//! ```
//!
//! The chunk mesher and ground collision both go through this type, so the
//! rendered surface and the walkable surface agree.

use crate::chunk::ChunkCoord;
use crate::constants::{
  CELL_SIZE, CHUNK_COLUMNS, CHUNK_ROWS, CHUNK_SIZE, GROUND_CLEARANCE, HORIZONTAL_SCALE, MAX_CHUNK_SIZE,
  VERTICAL_OFFSET,
};
use crate::matrix::Matrix4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainLayout {
  /// Cells per chunk side.
  pub chunk_size: usize,
  pub columns: usize,
  pub rows: usize,
  /// Model-space spacing of lattice points.
  pub cell_size: f32,
  pub horizontal_scale: f32,
  pub vertical_scale: f32,
  /// Model-space vertical offset, applied before the vertical scale.
  pub vertical_offset: f32,
}

impl TerrainLayout {
  /// Default 2 × 2 layout. Even seeds get a vertical scale of 2, odd
  /// seeds 1.
  pub fn for_seed(seed: u32) -> Self {
    Self {
      chunk_size: CHUNK_SIZE,
      columns: CHUNK_COLUMNS,
      rows: CHUNK_ROWS,
      cell_size: CELL_SIZE,
      horizontal_scale: HORIZONTAL_SCALE,
      vertical_scale: Self::vertical_scale_for_seed(seed),
      vertical_offset: VERTICAL_OFFSET,
    }
  }

  pub fn vertical_scale_for_seed(seed: u32) -> f32 {
    if seed % 2 == 0 {
      2.0
    } else {
      1.0
    }
  }

  /// Cells per chunk side, clamped to `1..=MAX_CHUNK_SIZE` like
  /// `TerrainChunkBuilder::with_size`.
  pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
    self.chunk_size = chunk_size.clamp(1, MAX_CHUNK_SIZE);
    self
  }

  pub fn with_grid(mut self, columns: usize, rows: usize) -> Self {
    self.columns = columns;
    self.rows = rows;
    self
  }

  pub fn with_cell_size(mut self, cell_size: f32) -> Self {
    self.cell_size = cell_size;
    self
  }

  pub fn with_horizontal_scale(mut self, horizontal_scale: f32) -> Self {
    self.horizontal_scale = horizontal_scale;
    self
  }

  pub fn with_vertical_offset(mut self, vertical_offset: f32) -> Self {
    self.vertical_offset = vertical_offset;
    self
  }

  pub fn chunk_count(&self) -> usize {
    self.columns * self.rows
  }

  /// Every chunk of the grid, rows outer.
  pub fn chunk_coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
    (0..self.rows).flat_map(move |y| (0..self.columns).map(move |x| ChunkCoord::new(x as i32, y as i32)))
  }

  /// Centre of the chunk grid in grid units, used as the falloff centre.
  pub fn falloff_center(&self) -> [f32; 2] {
    let size = self.chunk_size as f32;
    [self.columns as f32 / 2.0 * size, self.rows as f32 / 2.0 * size]
  }

  /// Edge length of one chunk in model units.
  pub fn chunk_extent(&self) -> f32 {
    self.chunk_size as f32 * self.cell_size
  }

  /// Places a chunk so the grid centre lands at the world origin.
  pub fn chunk_model_matrix(&self, coord: ChunkCoord) -> Matrix4 {
    let extent = self.chunk_extent();
    let tx = (coord.x as f32 - self.columns as f32 / 2.0) * extent;
    let tz = (coord.y as f32 - self.rows as f32 / 2.0) * extent;
    Matrix4::scaling(self.horizontal_scale, self.vertical_scale, self.horizontal_scale).translate(
      tx,
      self.vertical_offset,
      tz,
    )
  }

  /// World units per grid unit.
  #[inline]
  pub fn grid_unit(&self) -> f32 {
    self.cell_size * self.horizontal_scale
  }

  pub fn world_to_grid(&self, world_x: f32, world_z: f32) -> [f32; 2] {
    let unit = self.grid_unit();
    let [center_x, center_z] = self.falloff_center();
    [world_x / unit + center_x + 0.5, world_z / unit + center_z + 0.5]
  }

  pub fn grid_to_world(&self, grid_x: f32, grid_z: f32) -> [f32; 2] {
    let unit = self.grid_unit();
    let [center_x, center_z] = self.falloff_center();
    [(grid_x - center_x - 0.5) * unit, (grid_z - center_z - 0.5) * unit]
  }

  /// World-space height of a surface point with raw elevation `elevation`.
  #[inline]
  pub fn surface_height(&self, elevation: f32) -> f32 {
    self.vertical_scale * (elevation + self.vertical_offset)
  }

  /// Eye height above the surface. Equals the raw-elevation clearance the
  /// walk is tuned for at unit vertical scale.
  #[inline]
  pub fn eye_height(&self) -> f32 {
    -self.vertical_offset - GROUND_CLEARANCE
  }
}

impl Default for TerrainLayout {
  fn default() -> Self {
    Self::for_seed(1)
  }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;
