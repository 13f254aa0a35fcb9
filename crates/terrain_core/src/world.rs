//! TerrainWorld - one generated terrain and everything derived from its
//! seed.
//!
//! Generation runs once, before the first frame. Afterwards the world is
//! read-only: chunks are handed to the backend and the height field answers
//! ground queries.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use web_time::Instant;

use crate::chunk::{ChunkCoord, ColorJitter, FallbackPattern, TerrainChunk, TerrainChunkBuilder, TextureImage};
use crate::collision::GroundCollision;
use crate::config::ResolvedConfig;
use crate::height_field::HeightField;
use crate::layout::TerrainLayout;
use crate::matrix::Matrix4;
use crate::noise::NoiseContext;

// =============================================================================
// WorldId - unique identifier
// =============================================================================

static WORLD_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque world identifier, unique within the process.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WorldId(u64);

impl WorldId {
  pub fn new() -> Self {
    Self(WORLD_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
  }

  pub fn raw(&self) -> u64 {
    self.0
  }
}

impl Default for WorldId {
  fn default() -> Self {
    Self::new()
  }
}

// =============================================================================
// TerrainWorld
// =============================================================================

#[derive(Debug)]
pub struct TerrainWorld {
  pub id: WorldId,
  config: ResolvedConfig,
  field: HeightField,
  jitter: ColorJitter,
  chunks: Vec<TerrainChunk>,
}

impl TerrainWorld {
  /// Build every chunk of the configured layout.
  #[tracing::instrument(skip_all, name = "world::generate", fields(seed = config.seed))]
  pub fn generate(mut config: ResolvedConfig) -> Self {
    let start = Instant::now();
    // The builder and the layout must agree on the chunk size
    config.layout = config.layout.with_chunk_size(config.layout.chunk_size);
    let layout = config.layout;
    let field = HeightField::new(NoiseContext::new(config.seed), layout.falloff_center());
    let texture = Arc::new(TextureImage::resolve(&config.texture, FallbackPattern::Terrain));

    let builder = TerrainChunkBuilder::new(&field, config.base_color)
      .with_size(layout.chunk_size)
      .with_cell_size(layout.cell_size)
      .with_texture(texture);
    let jitter = builder.jitter();
    let chunks: Vec<_> = layout.chunk_coords().map(|coord| builder.build(coord)).collect();

    tracing::info!(
      seed = config.seed,
      columns = layout.columns,
      rows = layout.rows,
      chunk_size = layout.chunk_size,
      vertical_scale = layout.vertical_scale,
      base_color = ?config.base_color.0,
      jitter = ?jitter.0,
      elapsed_ms = start.elapsed().as_millis() as u64,
      "world generated"
    );

    Self {
      id: WorldId::new(),
      config,
      field,
      jitter,
      chunks,
    }
  }

  pub fn seed(&self) -> u32 {
    self.config.seed
  }

  pub fn config(&self) -> &ResolvedConfig {
    &self.config
  }

  pub fn layout(&self) -> &TerrainLayout {
    &self.config.layout
  }

  pub fn field(&self) -> &HeightField {
    &self.field
  }

  pub fn jitter(&self) -> ColorJitter {
    self.jitter
  }

  pub fn chunks(&self) -> &[TerrainChunk] {
    &self.chunks
  }

  pub fn chunk(&self, coord: ChunkCoord) -> Option<&TerrainChunk> {
    self.chunks.iter().find(|chunk| chunk.coord == coord)
  }

  pub fn chunk_model_matrix(&self, coord: ChunkCoord) -> Matrix4 {
    self.config.layout.chunk_model_matrix(coord)
  }

  pub fn ground_collision(&self) -> GroundCollision {
    GroundCollision::new(self.config.layout, self.config.motion)
  }
}

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;
