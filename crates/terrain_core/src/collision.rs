//! Player motion and ground collision.
//!
//! ```text
//!                jump, or y > ground
//!   ┌──────────┐ ───────────────────▶ ┌──────────┐
//!   │ Grounded │                      │ Airborne │  v -= gravity; y += v
//!   └──────────┘ ◀─────────────────── └──────────┘
//!                y ≤ ground: snap, v = 0
//! ```
//!
//! Ground height is the highest corner of the height-field cell under the
//! player, mapped to world space through `TerrainLayout`, plus the eye
//! height.

use serde::Deserialize;

use crate::constants::{
  DESCEND_STEP, GRAVITY, JUMP_IMPULSE, LOOK_DROP, MOVE_SPEED, SPAWN_HEADING_DEGREES, TURN_STEP_DEGREES,
};
use crate::height_field::HeightField;
use crate::input::InputState;
use crate::layout::TerrainLayout;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionState {
  #[default]
  Grounded,
  /// Jumping or falling.
  Airborne,
}

/// When gravity and the ground clamp are evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityMode {
  /// Every tick.
  #[default]
  Always,
  /// Only while airborne or while a movement intent is held. A player
  /// left mid-air with no input stays there.
  IntentGated,
}

/// Per-frame motion constants. Deserialises from the `[motion]` table.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionTuning {
  pub turn_step_degrees: f32,
  pub move_speed: f32,
  pub gravity: f32,
  pub jump_impulse: f32,
  /// Look target sits this far below the eye.
  pub look_drop: f32,
  pub descend_step: f32,
  pub gravity_mode: GravityMode,
}

impl Default for MotionTuning {
  fn default() -> Self {
    Self {
      turn_step_degrees: TURN_STEP_DEGREES,
      move_speed: MOVE_SPEED,
      gravity: GRAVITY,
      jump_impulse: JUMP_IMPULSE,
      look_drop: LOOK_DROP,
      descend_step: DESCEND_STEP,
      gravity_mode: GravityMode::Always,
    }
  }
}

impl MotionTuning {
  pub fn with_gravity_mode(mut self, gravity_mode: GravityMode) -> Self {
    self.gravity_mode = gravity_mode;
    self
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerState {
  /// Eye position in world space.
  pub position: [f32; 3],
  pub look_at: [f32; 3],
  /// Heading around +y in degrees. 0 looks along +x, 90 along +z.
  pub heading_degrees: f32,
  pub motion: MotionState,
  pub vertical_velocity: f32,
}

impl PlayerState {
  /// Grounded player at `position` with the look target derived from
  /// `heading_degrees` and the default look drop. Use `with_look_drop`
  /// (or `GroundCollision::spawn_player`) for tuned motion.
  pub fn new(position: [f32; 3], heading_degrees: f32) -> Self {
    let mut player = Self {
      position,
      look_at: position,
      heading_degrees,
      motion: MotionState::Grounded,
      vertical_velocity: 0.0,
    };
    player.update_look_at(LOOK_DROP);
    player
  }

  /// Start of a walk: just in front of the origin, facing −z.
  pub fn spawn() -> Self {
    Self::new([0.0, 0.0, 1.0], SPAWN_HEADING_DEGREES)
  }

  /// Recompute the look target with `look_drop` below the eye.
  pub fn with_look_drop(mut self, look_drop: f32) -> Self {
    self.update_look_at(look_drop);
    self
  }

  pub fn is_grounded(&self) -> bool {
    self.motion == MotionState::Grounded
  }

  /// Unit horizontal direction `(cos, sin)` of the heading.
  pub fn forward(&self) -> [f32; 2] {
    let radians = self.heading_degrees.to_radians();
    [radians.cos(), radians.sin()]
  }

  fn update_look_at(&mut self, look_drop: f32) {
    let [dx, dz] = self.forward();
    self.look_at = [self.position[0] + dx, self.position[1] - look_drop, self.position[2] + dz];
  }
}

impl Default for PlayerState {
  fn default() -> Self {
    Self::spawn()
  }
}

/// Resolves intents into motion and keeps the player on the terrain.
#[derive(Clone, Copy, Debug)]
pub struct GroundCollision {
  layout: TerrainLayout,
  tuning: MotionTuning,
}

impl GroundCollision {
  pub fn new(layout: TerrainLayout, tuning: MotionTuning) -> Self {
    Self { layout, tuning }
  }

  pub fn tuning(&self) -> &MotionTuning {
    &self.tuning
  }

  pub fn layout(&self) -> &TerrainLayout {
    &self.layout
  }

  /// `PlayerState::spawn` with the look target placed by this tuning.
  pub fn spawn_player(&self) -> PlayerState {
    PlayerState::spawn().with_look_drop(self.tuning.look_drop)
  }

  /// Lowest eye height allowed at world position `(x, z)`.
  pub fn ground_height(&self, field: &HeightField, x: f32, z: f32) -> f32 {
    let [grid_x, grid_z] = self.layout.world_to_grid(x, z);
    let elevation = field.max_cell_elevation(grid_x, grid_z);
    self.layout.surface_height(elevation) + self.layout.eye_height()
  }

  /// Advance `player` by one frame.
  ///
  /// Returns the ground height when gravity and the ground clamp were
  /// evaluated, `None` when `GravityMode::IntentGated` skipped them.
  pub fn step(&self, field: &HeightField, player: &mut PlayerState, input: &InputState) -> Option<f32> {
    let tuning = &self.tuning;

    if input.descend {
      player.position[1] -= tuning.descend_step;
    }
    if input.jump && player.is_grounded() {
      player.motion = MotionState::Airborne;
      player.vertical_velocity = tuning.jump_impulse;
      tracing::debug!(y = player.position[1], "jump");
    }

    if input.move_right {
      player.heading_degrees += tuning.turn_step_degrees;
    }
    if input.move_left {
      player.heading_degrees -= tuning.turn_step_degrees;
    }

    let [dx, dz] = player.forward();
    if input.move_forward {
      player.position[0] += dx * tuning.move_speed;
      player.position[2] += dz * tuning.move_speed;
    }
    if input.move_back {
      player.position[0] -= dx * tuning.move_speed;
      player.position[2] -= dz * tuning.move_speed;
    }

    let evaluate = match tuning.gravity_mode {
      GravityMode::Always => true,
      GravityMode::IntentGated => !player.is_grounded() || input.any_movement(),
    };

    let ground = if evaluate {
      Some(self.apply_gravity(field, player))
    } else {
      None
    };

    player.update_look_at(tuning.look_drop);
    ground
  }

  fn apply_gravity(&self, field: &HeightField, player: &mut PlayerState) -> f32 {
    if !player.is_grounded() {
      player.vertical_velocity -= self.tuning.gravity;
      player.position[1] += player.vertical_velocity;
    }

    let ground = self.ground_height(field, player.position[0], player.position[2]);
    if player.position[1] <= ground {
      if !player.is_grounded() {
        tracing::debug!(y = ground, velocity = player.vertical_velocity, "landed");
      }
      player.position[1] = ground;
      player.motion = MotionState::Grounded;
      player.vertical_velocity = 0.0;
    } else if player.is_grounded() {
      tracing::debug!(y = player.position[1], ground, "falling");
      player.motion = MotionState::Airborne;
    }
    ground
  }
}

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;
