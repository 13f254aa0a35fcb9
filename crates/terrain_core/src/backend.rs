//! Rendering backend seam.
//!
//! The core never touches a graphics API. It uploads static meshes and
//! textures once, then each frame hands the backend one `DrawCall` per
//! object with the model, view and projection matrices.

use crate::chunk::TextureImage;
use crate::matrix::Matrix4;
use crate::types::MeshBuffers;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
  pub mesh: MeshHandle,
  pub texture: TextureHandle,
  pub model: Matrix4,
  pub view: Matrix4,
  pub projection: Matrix4,
}

pub trait RenderBackend {
  fn upload_mesh(&mut self, mesh: &MeshBuffers) -> MeshHandle;

  fn bind_texture(&mut self, texture: &TextureImage) -> TextureHandle;

  fn draw(&mut self, call: &DrawCall);

  fn begin_frame(&mut self) {}

  fn end_frame(&mut self) {}
}

/// Headless backend that keeps everything it is given.
#[derive(Debug, Default)]
pub struct RecordingBackend {
  pub meshes: Vec<MeshBuffers>,
  pub textures: Vec<TextureImage>,
  /// Draw calls of the current (or last completed) frame.
  pub frame_draws: Vec<DrawCall>,
  pub frames: u64,
  pub total_draws: u64,
}

impl RecordingBackend {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn mesh(&self, handle: MeshHandle) -> Option<&MeshBuffers> {
    self.meshes.get(handle.0 as usize)
  }

  pub fn texture(&self, handle: TextureHandle) -> Option<&TextureImage> {
    self.textures.get(handle.0 as usize)
  }
}

impl RenderBackend for RecordingBackend {
  fn upload_mesh(&mut self, mesh: &MeshBuffers) -> MeshHandle {
    self.meshes.push(mesh.clone());
    MeshHandle((self.meshes.len() - 1) as u32)
  }

  fn bind_texture(&mut self, texture: &TextureImage) -> TextureHandle {
    self.textures.push(texture.clone());
    TextureHandle((self.textures.len() - 1) as u32)
  }

  fn draw(&mut self, call: &DrawCall) {
    self.frame_draws.push(*call);
    self.total_draws += 1;
  }

  fn begin_frame(&mut self) {
    self.frame_draws.clear();
  }

  fn end_frame(&mut self) {
    self.frames += 1;
  }
}
