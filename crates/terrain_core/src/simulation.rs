//! Frame loop: input → collision → camera → draw calls.
//!
//! ```text
//!   Simulation::new                       Simulation::tick (per frame)
//!   ─────────────────                     ────────────────────────────
//!   validate camera                       quit? ──▶ TickOutcome::Quit
//!   TerrainWorld::generate                GroundCollision::step
//!   upload chunk + prop meshes            FrameClock::advance
//!   bind textures                         CameraRig::update
//!                                         draw cube, plane, chunks
//! ```

use web_time::Instant;

use crate::backend::{DrawCall, MeshHandle, RenderBackend, TextureHandle};
use crate::camera::CameraRig;
use crate::chunk::{TextureImage, TextureSource};
use crate::clock::FrameClock;
use crate::collision::{GroundCollision, PlayerState};
use crate::config::ResolvedConfig;
use crate::error::TerrainError;
use crate::input::InputState;
use crate::matrix::Matrix4;
use crate::metrics::FrameMetrics;
use crate::primitives::PropKind;
use crate::world::TerrainWorld;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
  Continue,
  Quit,
}

#[derive(Clone, Copy, Debug)]
struct Renderable {
  mesh: MeshHandle,
  texture: TextureHandle,
}

#[derive(Clone, Copy, Debug)]
struct ChunkInstance {
  renderable: Renderable,
  model: Matrix4,
}

#[derive(Clone, Copy, Debug)]
struct PropInstance {
  kind: PropKind,
  renderable: Renderable,
}

impl PropInstance {
  /// Model matrix at animation frame `frame`.
  fn model(&self, frame: u64) -> Matrix4 {
    match self.kind {
      PropKind::Cube => {
        let t = frame as f32;
        Matrix4::translation(-1.0, 0.0, -1.0).rotate(t, (t * 0.01).sin(), 1.0, 0.0)
      }
      PropKind::Plane => Matrix4::translation(1.0, 0.0, -1.0),
    }
  }
}

pub struct Simulation<B: RenderBackend> {
  backend: B,
  world: TerrainWorld,
  player: PlayerState,
  collision: GroundCollision,
  camera: CameraRig,
  clock: FrameClock,
  metrics: FrameMetrics,
  chunks: Vec<ChunkInstance>,
  props: Vec<PropInstance>,
}

impl<B: RenderBackend> Simulation<B> {
  /// Validate the camera, generate the world and upload every static mesh.
  pub fn new(config: ResolvedConfig, mut backend: B) -> Result<Self, TerrainError> {
    let camera = CameraRig::new(config.camera)?;
    let world = TerrainWorld::generate(config);
    let mut metrics = FrameMetrics::new();

    let mut chunks = Vec::with_capacity(world.chunks().len());
    for chunk in world.chunks() {
      let mesh = backend.upload_mesh(&chunk.to_buffers());
      let texture = backend.bind_texture(&chunk.texture);
      metrics.record_chunk(chunk.build_time_us, chunk.vertices.len(), chunk.indices.len());
      tracing::debug!(chunk = %chunk.coord, mesh = mesh.0, texture = texture.0, "chunk uploaded");
      chunks.push(ChunkInstance {
        renderable: Renderable { mesh, texture },
        model: world.chunk_model_matrix(chunk.coord),
      });
    }

    let props = [PropKind::Cube, PropKind::Plane]
      .into_iter()
      .map(|kind| {
        let mesh = backend.upload_mesh(&kind.mesh());
        let image = TextureImage::resolve(&TextureSource::None, kind.fallback_pattern());
        let texture = backend.bind_texture(&image);
        PropInstance {
          kind,
          renderable: Renderable { mesh, texture },
        }
      })
      .collect();

    let collision = world.ground_collision();
    tracing::info!(world = world.id.raw(), chunks = chunks.len(), "simulation ready");

    Ok(Self {
      backend,
      world,
      player: collision.spawn_player(),
      collision,
      camera,
      clock: FrameClock::default(),
      metrics,
      chunks,
      props,
    })
  }

  /// Run one frame with this frame's input.
  ///
  /// A quit intent ends the loop before any state changes. A rejected view
  /// matrix fails the tick without issuing draw calls.
  pub fn tick(&mut self, input: &InputState) -> Result<TickOutcome, TerrainError> {
    if input.quit {
      tracing::info!(frame = self.clock.frame(), "quit requested");
      return Ok(TickOutcome::Quit);
    }

    let start = Instant::now();
    let ground = self.collision.step(self.world.field(), &mut self.player, input);
    let frame = self.clock.advance(start);
    self.camera.update(&self.player)?;

    let view = *self.camera.view();
    let projection = *self.camera.projection();
    let mut draw_calls = 0u32;

    self.backend.begin_frame();
    for prop in &self.props {
      self.backend.draw(&DrawCall {
        mesh: prop.renderable.mesh,
        texture: prop.renderable.texture,
        model: prop.model(frame),
        view,
        projection,
      });
      draw_calls += 1;
    }
    for chunk in &self.chunks {
      self.backend.draw(&DrawCall {
        mesh: chunk.renderable.mesh,
        texture: chunk.renderable.texture,
        model: chunk.model,
        view,
        projection,
      });
      draw_calls += 1;
    }
    self.backend.end_frame();

    let elapsed_us = start.elapsed().as_micros() as u64;
    self.metrics.record_tick(elapsed_us, draw_calls);
    tracing::trace!(
      frame,
      position = ?self.player.position,
      heading = self.player.heading_degrees,
      motion = ?self.player.motion,
      ?ground,
      elapsed_us,
      "tick"
    );

    Ok(TickOutcome::Continue)
  }

  /// Tick only if the frame clock says one is due.
  pub fn poll(&mut self, now: Instant, input: &InputState) -> Result<Option<TickOutcome>, TerrainError> {
    if !input.quit && !self.clock.due(now) {
      return Ok(None);
    }
    self.tick(input).map(Some)
  }

  pub fn player(&self) -> &PlayerState {
    &self.player
  }

  /// Replace the player state, e.g. to teleport.
  pub fn set_player(&mut self, player: PlayerState) {
    self.player = player;
  }

  pub fn world(&self) -> &TerrainWorld {
    &self.world
  }

  pub fn camera(&self) -> &CameraRig {
    &self.camera
  }

  pub fn clock(&self) -> &FrameClock {
    &self.clock
  }

  pub fn metrics(&self) -> &FrameMetrics {
    &self.metrics
  }

  pub fn backend(&self) -> &B {
    &self.backend
  }

  pub fn into_backend(self) -> B {
    self.backend
  }
}

#[cfg(test)]
#[path = "simulation_test.rs"]
mod simulation_test;
