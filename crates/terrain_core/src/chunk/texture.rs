//! Texture sources and the built-in checkerboard fallbacks.
//!
//! A mesh is textured either from an image file or, when no file is
//! configured or decoding fails, from a 2×2 RGB checkerboard specific to
//! its mesh kind. Texture coordinates repeat once per grid cell, so the
//! backend should sample with mirrored-repeat wrapping and nearest
//! filtering.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::TextureError;

/// Where a mesh's texture comes from.
///
/// In TOML: `texture = "none"` or `texture = { path = "rock.png" }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureSource {
  /// Use the mesh kind's fallback checkerboard.
  #[default]
  None,
  Path(PathBuf),
}

/// Fallback checkerboard per mesh kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackPattern {
  /// Pale pink / green / lilac.
  Terrain,
  /// Sand tones.
  Plane,
  /// Black and white.
  Cube,
}

impl FallbackPattern {
  /// Texels in row-major order.
  #[rustfmt::skip]
  pub fn texels(self) -> [[f32; 3]; 4] {
    match self {
      Self::Terrain => [
        [1.0, 0.9, 1.0], [0.9, 1.0, 0.9],
        [1.0, 0.9, 0.9], [0.9, 0.9, 1.0],
      ],
      Self::Plane => [
        [0.9, 0.8, 0.58], [0.66, 0.54, 0.33],
        [0.66, 0.54, 0.33], [0.9, 0.8, 0.58],
      ],
      Self::Cube => [
        [1.0, 1.0, 1.0], [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0], [1.0, 1.0, 1.0],
      ],
    }
  }
}

/// Decoded RGB image with float channels in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureImage {
  pub width: u32,
  pub height: u32,
  /// Row-major RGB texels, `width * height` entries.
  pub pixels: Vec<[f32; 3]>,
}

impl TextureImage {
  pub fn fallback(pattern: FallbackPattern) -> Self {
    Self {
      width: 2,
      height: 2,
      pixels: pattern.texels().to_vec(),
    }
  }

  /// Decode an image file into RGB floats.
  pub fn load(path: &Path) -> Result<Self, TextureError> {
    let decoded = image::open(path).map_err(|source| TextureError::Load {
      path: path.to_path_buf(),
      source,
    })?;
    let rgb = decoded.to_rgb32f();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
      return Err(TextureError::Empty(path.to_path_buf()));
    }

    let pixels = rgb.pixels().map(|p| p.0).collect();
    Ok(Self { width, height, pixels })
  }

  /// Resolve `source`, falling back to `pattern` on `None` or on any load
  /// failure.
  pub fn resolve(source: &TextureSource, pattern: FallbackPattern) -> Self {
    match source {
      TextureSource::None => Self::fallback(pattern),
      TextureSource::Path(path) => match Self::load(path) {
        Ok(image) => {
          tracing::debug!(path = %path.display(), width = image.width, height = image.height, "texture loaded");
          image
        }
        Err(err) => {
          tracing::warn!(path = %path.display(), error = %err, ?pattern, "texture load failed, using fallback");
          Self::fallback(pattern)
        }
      },
    }
  }

  pub fn texel(&self, x: u32, y: u32) -> Option<[f32; 3]> {
    if x >= self.width || y >= self.height {
      return None;
    }
    self.pixels.get((y * self.width + x) as usize).copied()
  }
}

#[cfg(test)]
#[path = "texture_test.rs"]
mod texture_test;
