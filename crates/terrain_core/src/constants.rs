//! Terrain generation and motion constants.
//!
//! Grid units are lattice cells of the height field. A chunk covers
//! `CHUNK_SIZE` cells along each horizontal axis; mesh vertices are placed
//! `CELL_SIZE` apart in model space and the chunk model matrix scales them
//! by `HORIZONTAL_SCALE`.
//!
//! ```text
//!            chunk (0,1)        chunk (1,1)
//!        ┌────────────────┬────────────────┐
//!        │                │                │
//!        │                │                │
//!        │                │                │
//!        ├────────────────●────────────────┤   ● falloff centre
//!        │                │                │     (cols/2 · size, rows/2 · size)
//!        │                │                │     = (216, 216) grid units
//!        │                │                │
//!        └────────────────┴────────────────┘
//!            chunk (0,0)        chunk (1,0)
//! ```

/// Default chunk edge length in grid cells.
pub const CHUNK_SIZE: usize = 216;

/// Largest accepted chunk edge length. Keeps vertex indices within `u32`.
pub const MAX_CHUNK_SIZE: usize = 4096;

/// Default number of chunk columns / rows (2 × 2 = 4 chunks).
pub const CHUNK_COLUMNS: usize = 2;
pub const CHUNK_ROWS: usize = 2;

/// Model-space spacing between adjacent mesh lattice points.
pub const CELL_SIZE: f32 = 0.1;

/// Horizontal scale applied by every chunk model matrix.
pub const HORIZONTAL_SCALE: f32 = 48.0;

/// Vertical model-space offset applied before the vertical scale.
pub const VERTICAL_OFFSET: f32 = -8.0;

// =============================================================================
// Height field
// =============================================================================

/// Sample frequency of the fine ridge component.
pub const RIDGE_FREQUENCY: f32 = 0.025;

/// Upper clamp applied to ridge noise before squaring.
pub const RIDGE_CLAMP: f32 = 0.9;

/// Sample frequency of the large-scale mountain mass component.
pub const MASS_FREQUENCY: f32 = 0.015;

/// Octave base frequency of the mountain mass component.
pub const MASS_OCTAVE_FREQUENCY: f32 = 0.5;

/// Distance (grid units) that maps to a falloff of 2.5.
pub const FALLOFF_RADIUS: f32 = 128.0;
pub const FALLOFF_GAIN: f32 = 2.5;

/// Falloff ceiling.
pub const FALLOFF_MAX: f32 = 4.0;

/// Below this falloff the ridge is scaled by `2 * falloff`.
pub const FLATTEN_BELOW: f32 = 0.5;

// =============================================================================
// Motion
// =============================================================================

/// Heading change per frame of turn intent, degrees.
pub const TURN_STEP_DEGREES: f32 = 4.0;

/// Horizontal displacement per frame of move intent.
pub const MOVE_SPEED: f32 = 3.15;

/// Downward acceleration per frame.
pub const GRAVITY: f32 = 0.02;

/// Vertical velocity set by a jump from the ground.
pub const JUMP_IMPULSE: f32 = 0.6;

/// Look target sits this far below the eye.
pub const LOOK_DROP: f32 = 0.25;

/// Raw-elevation clearance between the eye and the ground at unit
/// vertical scale.
pub const GROUND_CLEARANCE: f32 = 4.5;

/// Vertical distance dropped by the descend intent.
pub const DESCEND_STEP: f32 = 4.0;

/// Heading of a freshly spawned player, degrees.
pub const SPAWN_HEADING_DEGREES: f32 = -90.0;

// =============================================================================
// Camera
// =============================================================================

pub const FOV_Y_DEGREES: f32 = 90.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1450.0;
pub const VIEWPORT_WIDTH: u32 = 1200;
pub const VIEWPORT_HEIGHT: u32 = 800;

/// Target tick rate of the frame scheduler.
pub const TARGET_TICK_HZ: f64 = 60.0;

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
