//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected inputs to projection and view construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MatrixError {
  /// near == far, aspect == 0, or sin(fov/2) == 0.
  #[error("null frustum (fov_y={fov_y_degrees}, aspect={aspect}, near={near}, far={far})")]
  NullFrustum {
    fov_y_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
  },

  #[error("near plane must be positive, got {0}")]
  NonPositiveNear(f32),

  #[error("far plane must be positive, got {0}")]
  NonPositiveFar(f32),

  /// Eye equals center, or the view direction is parallel to up.
  #[error("degenerate view basis")]
  DegenerateView,

  #[error("non-finite matrix input")]
  NonFinite,
}

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file {path}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse config TOML")]
  Parse(#[from] toml::de::Error),

  #[error("invalid config: {0}")]
  Invalid(String),
}

/// Texture decoding failures. Recovered locally by the fallback pattern.
#[derive(Debug, Error)]
pub enum TextureError {
  #[error("failed to load image {path}")]
  Load {
    path: PathBuf,
    #[source]
    source: image::ImageError,
  },

  #[error("image {0} has no pixels")]
  Empty(PathBuf),
}

/// Top-level error for world generation and simulation.
#[derive(Debug, Error)]
pub enum TerrainError {
  #[error(transparent)]
  Matrix(#[from] MatrixError),

  #[error(transparent)]
  Config(#[from] ConfigError),
}
