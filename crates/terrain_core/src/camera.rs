//! View and projection matrices derived from the player each frame.

use serde::Deserialize;

use crate::collision::PlayerState;
use crate::constants::{FAR_PLANE, FOV_Y_DEGREES, NEAR_PLANE, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::error::MatrixError;
use crate::matrix::Matrix4;

/// World up used for every view matrix.
pub const WORLD_UP: [f32; 3] = [0.0, 1.0, 0.0];

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
  pub fov_y_degrees: f32,
  pub near: f32,
  pub far: f32,
  pub viewport_width: u32,
  pub viewport_height: u32,
}

impl Default for CameraConfig {
  fn default() -> Self {
    Self {
      fov_y_degrees: FOV_Y_DEGREES,
      near: NEAR_PLANE,
      far: FAR_PLANE,
      viewport_width: VIEWPORT_WIDTH,
      viewport_height: VIEWPORT_HEIGHT,
    }
  }
}

impl CameraConfig {
  pub fn aspect(&self) -> f32 {
    if self.viewport_height == 0 {
      return 0.0;
    }
    self.viewport_width as f32 / self.viewport_height as f32
  }

  pub fn projection(&self) -> Result<Matrix4, MatrixError> {
    Matrix4::perspective(self.fov_y_degrees, self.aspect(), self.near, self.far)
  }
}

#[derive(Clone, Debug)]
pub struct CameraRig {
  config: CameraConfig,
  view: Matrix4,
  projection: Matrix4,
}

impl CameraRig {
  /// Fails if `config` does not describe a valid frustum.
  pub fn new(config: CameraConfig) -> Result<Self, MatrixError> {
    let projection = config.projection()?;
    Ok(Self {
      config,
      view: Matrix4::IDENTITY,
      projection,
    })
  }

  /// Rebuild projection and view for this frame.
  ///
  /// On error the previous matrices are kept and the frame should not be
  /// drawn.
  pub fn update(&mut self, player: &PlayerState) -> Result<(), MatrixError> {
    let projection = self.config.projection()?;
    let view = Matrix4::look_at(player.position, player.look_at, WORLD_UP)?;
    self.projection = projection;
    self.view = view;
    Ok(())
  }

  pub fn config(&self) -> &CameraConfig {
    &self.config
  }

  pub fn view(&self) -> &Matrix4 {
    &self.view
  }

  pub fn projection(&self) -> &Matrix4 {
    &self.projection
  }

  pub fn view_projection(&self) -> Matrix4 {
    self.projection * self.view
  }
}

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;
