//! World configuration.
//!
//! ```toml
//! seed = 42                       # omit for a time-derived seed
//! chunk_size = 216
//! chunk_columns = 2
//! chunk_rows = 2
//! base_color = [1.2, 0.9, 0.7]    # omit for a random colour
//! texture = { path = "rock.png" } # or "none"
//!
//! [camera]
//! fov_y_degrees = 90.0
//!
//! [motion]
//! gravity_mode = "intent_gated"
//!
//! [layout]
//! horizontal_scale = 48.0
//! ```
//!
//! Every key is optional. `resolve()` validates, then pins the seed and
//! base colour so that everything after startup is deterministic.

use std::path::Path;

use rand::Rng;
use serde::Deserialize;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::camera::CameraConfig;
use crate::chunk::{BaseColor, TextureSource};
use crate::collision::MotionTuning;
use crate::constants::{
  CELL_SIZE, CHUNK_COLUMNS, CHUNK_ROWS, CHUNK_SIZE, HORIZONTAL_SCALE, MAX_CHUNK_SIZE, VERTICAL_OFFSET,
};
use crate::error::ConfigError;
use crate::layout::TerrainLayout;

/// Time-derived seeds are reduced modulo this.
const TIME_SEED_MODULUS: u64 = 999;

/// Upper bound on chunks per grid axis.
const MAX_CHUNKS_PER_AXIS: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
  pub cell_size: f32,
  pub horizontal_scale: f32,
  pub vertical_offset: f32,
}

impl Default for LayoutConfig {
  fn default() -> Self {
    Self {
      cell_size: CELL_SIZE,
      horizontal_scale: HORIZONTAL_SCALE,
      vertical_offset: VERTICAL_OFFSET,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
  pub seed: Option<u32>,
  pub chunk_size: usize,
  pub chunk_columns: usize,
  pub chunk_rows: usize,
  pub base_color: Option<[f32; 3]>,
  pub texture: TextureSource,
  pub camera: CameraConfig,
  pub motion: MotionTuning,
  pub layout: LayoutConfig,
}

impl Default for WorldConfig {
  fn default() -> Self {
    Self {
      seed: None,
      chunk_size: CHUNK_SIZE,
      chunk_columns: CHUNK_COLUMNS,
      chunk_rows: CHUNK_ROWS,
      base_color: None,
      texture: TextureSource::None,
      camera: CameraConfig::default(),
      motion: MotionTuning::default(),
      layout: LayoutConfig::default(),
    }
  }
}

impl WorldConfig {
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_toml_str(&text)
  }

  pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if !(1..=MAX_CHUNK_SIZE).contains(&self.chunk_size) {
      return invalid(format!("chunk_size must be in 1..={}, got {}", MAX_CHUNK_SIZE, self.chunk_size));
    }
    for (name, value) in [("chunk_columns", self.chunk_columns), ("chunk_rows", self.chunk_rows)] {
      if !(1..=MAX_CHUNKS_PER_AXIS).contains(&value) {
        return invalid(format!("{} must be in 1..={}, got {}", name, MAX_CHUNKS_PER_AXIS, value));
      }
    }

    let layout = &self.layout;
    require_positive("layout.cell_size", layout.cell_size)?;
    require_positive("layout.horizontal_scale", layout.horizontal_scale)?;
    if !layout.vertical_offset.is_finite() {
      return invalid(format!("layout.vertical_offset must be finite, got {}", layout.vertical_offset));
    }

    if let Some(color) = self.base_color {
      if !color.iter().all(|c| c.is_finite()) {
        return invalid(format!("base_color must be finite, got {:?}", color));
      }
    }

    if let Err(err) = self.camera.projection() {
      return invalid(format!("camera: {}", err));
    }

    let motion = &self.motion;
    for (name, value) in [
      ("motion.turn_step_degrees", motion.turn_step_degrees),
      ("motion.move_speed", motion.move_speed),
      ("motion.gravity", motion.gravity),
      ("motion.jump_impulse", motion.jump_impulse),
      ("motion.look_drop", motion.look_drop),
      ("motion.descend_step", motion.descend_step),
    ] {
      if !value.is_finite() || value < 0.0 {
        return invalid(format!("{} must be finite and non-negative, got {}", name, value));
      }
    }

    Ok(())
  }

  /// Validate, then pin the seed and base colour using the current time
  /// and the thread RNG.
  pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
    self.resolve_with(&mut rand::rng(), unix_seconds())
  }

  /// `resolve` with explicit entropy sources.
  pub fn resolve_with<R: Rng>(&self, rng: &mut R, unix_seconds: u64) -> Result<ResolvedConfig, ConfigError> {
    self.validate()?;
    Ok(self.pin(rng, unix_seconds))
  }

  fn pin<R: Rng>(&self, rng: &mut R, unix_seconds: u64) -> ResolvedConfig {
    let seed = self.seed.unwrap_or((unix_seconds % TIME_SEED_MODULUS) as u32);
    let base_color = self.base_color.map(BaseColor).unwrap_or_else(|| BaseColor::random(rng));

    let layout = TerrainLayout::for_seed(seed)
      .with_chunk_size(self.chunk_size)
      .with_grid(self.chunk_columns, self.chunk_rows)
      .with_cell_size(self.layout.cell_size)
      .with_horizontal_scale(self.layout.horizontal_scale)
      .with_vertical_offset(self.layout.vertical_offset);

    ResolvedConfig {
      seed,
      base_color,
      layout,
      texture: self.texture.clone(),
      camera: self.camera,
      motion: self.motion,
    }
  }
}

/// Fully determined configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
  pub seed: u32,
  pub base_color: BaseColor,
  pub layout: TerrainLayout,
  pub texture: TextureSource,
  pub camera: CameraConfig,
  pub motion: MotionTuning,
}

impl ResolvedConfig {
  /// Resolve the defaults with a fixed seed and base colour.
  pub fn with_seed(seed: u32, base_color: BaseColor) -> Self {
    let config = WorldConfig {
      seed: Some(seed),
      base_color: Some(base_color.0),
      ..WorldConfig::default()
    };
    config.pin(&mut rand::rng(), 0)
  }
}

fn invalid(message: String) -> Result<(), ConfigError> {
  Err(ConfigError::Invalid(message))
}

fn require_positive(name: &str, value: f32) -> Result<(), ConfigError> {
  if value.is_finite() && value > 0.0 {
    Ok(())
  } else {
    invalid(format!("{} must be positive, got {}", name, value))
  }
}

fn unix_seconds() -> u64 {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|elapsed| elapsed.as_secs())
    .unwrap_or(0)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
