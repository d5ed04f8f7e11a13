//! Common types for the simulator: parse errors and rover errors.

use std::fmt;

use glam::DVec2;

use crate::command::Command;

/// Errors produced while parsing a raw input line.
///
/// None of these are fatal; the `Display` text is the diagnostic shown to the
/// user before processing continues with the next line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Line did not split into `<COMMAND>` or `<COMMAND> <ARGS>`.
    Format,
    /// First token did not name a known command.
    UnknownCommand(String),
    /// Command requires an argument but none was given.
    MissingArgs(Command),
    /// Argument text could not be interpreted for the command.
    BadArgs { command: Command, args: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Format => {
                write!(f, "Input format should be `<COMMAND>` or `<COMMAND> <ARGS>`")
            }
            ParseError::UnknownCommand(token) => {
                write!(
                    f,
                    "Cannot interpret input '{}' as a command. Command must be one of ",
                    token
                )?;
                for (i, command) in Command::ALL.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", command)?;
                }
                write!(f, ".")
            }
            ParseError::MissingArgs(command) => {
                write!(f, "Arguments are required for command '{}'", command)
            }
            ParseError::BadArgs { command, args } => {
                write!(
                    f,
                    "Unable to interpret args '{}' for command '{}'",
                    args, command
                )
            }
        }
    }
}

/// Errors returned by rover construction and movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoverError {
    /// Requested placement lies outside the board.
    OutOfBounds(DVec2),
    /// Movement target lies outside the board.
    MoveBlocked { distance: f64 },
    /// Direction vector has zero length and cannot be normalized.
    ZeroDirection,
}

impl fmt::Display for RoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoverError::OutOfBounds(point) => {
                write!(f, "Point {} is out of bounds. Place action ignored.", point)
            }
            RoverError::MoveBlocked { distance } => {
                write!(
                    f,
                    "Cannot move {} units as this would move the rover out of bounds!",
                    distance
                )
            }
            RoverError::ZeroDirection => {
                write!(f, "Direction vector must have nonzero length.")
            }
        }
    }
}
