/// Distance covered by a single MOVE command.
pub const MOVE_DISTANCE: f64 = 1.0;

/// Rotation applied by the LEFT and RIGHT commands, in degrees.
pub const ROTATE_ANGLE_DEG: f64 = 90.0;

/// Default board extent along each axis.
pub const DEFAULT_BOARD_SIZE: f64 = 5.0;

/// L1 tolerance when snapping a heading onto a cardinal direction for display.
pub const CARDINAL_TOLERANCE: f64 = 1e-6;
