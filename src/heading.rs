//! Cardinal directions and heading math.

use std::fmt;

use glam::{DMat2, DVec2};

/// The four cardinal directions, each mapping onto an axis-aligned unit vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Every direction, in display order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit vector for this direction.
    pub fn as_vec(self) -> DVec2 {
        match self {
            Direction::North => DVec2::Y,
            Direction::East => DVec2::X,
            Direction::South => DVec2::NEG_Y,
            Direction::West => DVec2::NEG_X,
        }
    }

    /// Parse a direction token, case-insensitively.
    pub fn from_token(token: &str) -> Option<Direction> {
        match token.to_ascii_uppercase().as_str() {
            "NORTH" => Some(Direction::North),
            "EAST" => Some(Direction::East),
            "SOUTH" => Some(Direction::South),
            "WEST" => Some(Direction::West),
            _ => None,
        }
    }

    /// Cardinal direction closest to `v` by L1 distance, if within `tolerance`.
    ///
    /// Lets a heading live as an arbitrary vector while still printing as a
    /// cardinal name whenever it is close enough to one.
    pub fn nearest(v: DVec2, tolerance: f64) -> Option<Direction> {
        let mut best = Direction::North;
        let mut best_distance = f64::INFINITY;
        for direction in Direction::ALL {
            let distance = (direction.as_vec() - v).abs().element_sum();
            if distance < best_distance {
                best = direction;
                best_distance = distance;
            }
        }
        (best_distance <= tolerance).then_some(best)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        })
    }
}

/// Rotate `v` by `angle_deg` degrees. Counter-clockwise is positive.
pub fn rotate(v: DVec2, angle_deg: f64) -> DVec2 {
    DMat2::from_angle(angle_deg.to_radians()) * v
}
