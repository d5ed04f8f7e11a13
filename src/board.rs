//! The board that defines the simulation space.

use glam::DVec2;

/// Rectangular region of valid rover positions.
///
/// The valid region is the closed rectangle `[0, width] x [0, height]`;
/// points on the boundary are in bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    width: f64,
    height: f64,
}

impl Board {
    /// Create a board with the given extents along each axis.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Board extent along the x axis.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Board extent along the y axis.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns `true` if `point` lies within the board bounds.
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}
