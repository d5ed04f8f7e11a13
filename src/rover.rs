//! The rover: the simulated entity with movement and rotation functionality.

use glam::DVec2;

use crate::board::Board;
use crate::common::RoverError;
use crate::config::CARDINAL_TOLERANCE;
use crate::heading::{self, Direction};

/// A movable agent confined to a [`Board`].
///
/// The position is always within board bounds and the heading is always unit
/// length. Mutations that would break either invariant are rejected whole and
/// leave the rover untouched.
#[derive(Debug, Clone)]
pub struct Rover {
    board: Board,
    position: DVec2,
    direction: DVec2,
}

impl Rover {
    /// Create a rover on `board` at `position`, facing `direction`.
    ///
    /// Fails if `position` is out of bounds or `direction` has zero length.
    /// The stored direction is normalized to unit length.
    pub fn new(board: Board, position: DVec2, direction: DVec2) -> Result<Self, RoverError> {
        if !board.contains(position) {
            return Err(RoverError::OutOfBounds(position));
        }
        let direction = direction.try_normalize().ok_or(RoverError::ZeroDirection)?;
        Ok(Self {
            board,
            position,
            direction,
        })
    }

    /// Current position, relative to the board's south-west corner.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Current heading as a unit vector.
    pub fn direction(&self) -> DVec2 {
        self.direction
    }

    /// Move the rover to `position`, facing `direction`.
    ///
    /// An out-of-bounds position or zero-length direction is rejected without
    /// mutating the rover.
    pub fn place(&mut self, position: DVec2, direction: DVec2) -> Result<(), RoverError> {
        if !self.board.contains(position) {
            return Err(RoverError::OutOfBounds(position));
        }
        self.direction = direction.try_normalize().ok_or(RoverError::ZeroDirection)?;
        self.position = position;
        Ok(())
    }

    /// Advance `distance` units along the current heading.
    ///
    /// A step whose target lies outside the board is rejected whole; the
    /// rover does not slide to the edge.
    pub fn advance(&mut self, distance: f64) -> Result<(), RoverError> {
        let target = self.position + self.direction * distance;
        if !self.board.contains(target) {
            return Err(RoverError::MoveBlocked { distance });
        }
        self.position = target;
        Ok(())
    }

    /// Rotate the heading `angle_deg` degrees counter-clockwise.
    pub fn rotate_left(&mut self, angle_deg: f64) {
        self.direction = heading::rotate(self.direction, angle_deg);
    }

    /// Rotate the heading `angle_deg` degrees clockwise.
    pub fn rotate_right(&mut self, angle_deg: f64) {
        self.direction = heading::rotate(self.direction, -angle_deg);
    }

    /// Human-readable position and heading.
    ///
    /// The heading is printed as a cardinal name when it is within tolerance
    /// of one, otherwise as the raw direction vector.
    pub fn report(&self) -> String {
        match Direction::nearest(self.direction, CARDINAL_TOLERANCE) {
            Some(cardinal) => format!(
                "Rover Position: {:.2}, {:.2}, Direction: {}",
                self.position.x, self.position.y, cardinal
            ),
            None => format!(
                "Rover Position: {:.2}, {:.2}, Direction: {}",
                self.position.x, self.position.y, self.direction
            ),
        }
    }
}
