//! Per-frame input intents sampled by the backend.

/// Discrete intents for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
  pub move_forward: bool,
  pub move_back: bool,
  /// Turn left (heading decreases).
  pub move_left: bool,
  /// Turn right (heading increases).
  pub move_right: bool,
  /// Start a jump. Ignored while airborne.
  pub jump: bool,
  /// Drop straight down by a fixed step.
  pub descend: bool,
  pub quit: bool,
}

impl InputState {
  /// True when any of the four movement intents is held.
  pub fn any_movement(&self) -> bool {
    self.move_forward || self.move_back || self.move_left || self.move_right
  }
}
