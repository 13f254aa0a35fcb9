//! terrain_core - engine-independent procedural terrain and walk simulation
//!
//! Generates a tileable height-field terrain from seeded value noise,
//! meshes it into chunks, and keeps a walking viewpoint on its surface.
//! Rendering happens behind the [`RenderBackend`] trait: the core only
//! hands over mesh buffers, textures and matrices.
//!
//! # Features
//!
//! - **Value noise**: seeded 256-entry hash lattice with smoothstep
//!   interpolation, multi-octave `perlin2d`, ridge noise and turbulence
//! - **Height field**: ridge · mountain-mass elevation with radial falloff
//! - **Chunk meshing**: four vertices per cell, height-tinted colours,
//!   seamless tiling across chunk borders
//! - **Matrix4**: column-major transforms, perspective and look-at
//! - **Ground collision**: gravity, jumping and ground clamping against the
//!   same height field the mesh is built from
//!
//! # Example
//!
//! ```ignore
//! use terrain_core::{InputState, RecordingBackend, Simulation, WorldConfig};
//!
//! let config = WorldConfig::from_toml_str("seed = 42")?.resolve()?;
//! let mut sim = Simulation::new(config, RecordingBackend::new())?;
//! sim.tick(&InputState { move_forward: true, ..Default::default() })?;
//! ```

pub mod backend;
pub mod camera;
pub mod chunk;
pub mod clock;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod height_field;
pub mod input;
pub mod layout;
pub mod matrix;
pub mod metrics;
pub mod noise;
pub mod primitives;
pub mod simulation;
pub mod types;
pub mod world;

// Re-export commonly used items
pub use backend::{DrawCall, MeshHandle, RecordingBackend, RenderBackend, TextureHandle};
pub use camera::{CameraConfig, CameraRig};
pub use chunk::{
  BaseColor, ChunkCoord, ColorJitter, FallbackPattern, TerrainChunk, TerrainChunkBuilder, TextureImage,
  TextureSource,
};
pub use clock::FrameClock;
pub use collision::{GravityMode, GroundCollision, MotionState, MotionTuning, PlayerState};
pub use config::{LayoutConfig, ResolvedConfig, WorldConfig};
pub use error::{ConfigError, MatrixError, TerrainError, TextureError};
pub use height_field::{HeightField, HeightSample};
pub use input::InputState;
pub use layout::TerrainLayout;
pub use matrix::Matrix4;
pub use metrics::FrameMetrics;
pub use noise::NoiseContext;
pub use primitives::PropKind;
pub use simulation::{Simulation, TickOutcome};
pub use types::{MeshBuffers, MinMaxAABB, TerrainVertex};
pub use world::{TerrainWorld, WorldId};
