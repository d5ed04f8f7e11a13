//! Command vocabulary and raw-line parsing.

use std::fmt;
use std::path::PathBuf;

use glam::DVec2;

use crate::common::ParseError;
use crate::heading::Direction;

/// The set of commands understood by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    File,
    Place,
    Move,
    Left,
    Right,
    Report,
    Help,
    Exit,
}

impl Command {
    /// Every command, in the order HELP lists them.
    pub const ALL: [Command; 8] = [
        Command::File,
        Command::Place,
        Command::Move,
        Command::Left,
        Command::Right,
        Command::Report,
        Command::Help,
        Command::Exit,
    ];

    /// Wire token for this command.
    pub fn name(self) -> &'static str {
        match self {
            Command::File => "FILE",
            Command::Place => "PLACE",
            Command::Move => "MOVE",
            Command::Left => "LEFT",
            Command::Right => "RIGHT",
            Command::Report => "REPORT",
            Command::Help => "HELP",
            Command::Exit => "EXIT",
        }
    }

    /// One-line usage description shown by HELP.
    pub fn description(self) -> &'static str {
        match self {
            Command::File => {
                "Read commands from the provided filepath. Accepts one arg in the form of a filepath."
            }
            Command::Place => {
                "Place the rover at the specified x,y coordinates with given direction. Accepts one arg in the form x,y,Direction e.g. 1,3,NORTH"
            }
            Command::Move => "Move the rover one place forwards.",
            Command::Left => "Rotate the rover 90 degrees to the left.",
            Command::Right => "Rotate the rover 90 degrees to the right.",
            Command::Report => "Display the current location of the rover.",
            Command::Help => "Display a help message.",
            Command::Exit => "Exit the simulator.",
        }
    }

    fn from_token(token: &str) -> Option<Command> {
        match token.to_ascii_uppercase().as_str() {
            "FILE" => Some(Command::File),
            "PLACE" => Some(Command::Place),
            "MOVE" => Some(Command::Move),
            "LEFT" => Some(Command::Left),
            "RIGHT" => Some(Command::Right),
            "REPORT" => Some(Command::Report),
            "HELP" => Some(Command::Help),
            "EXIT" => Some(Command::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arguments for a PLACE command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceArgs {
    /// Board-relative position vector.
    pub position: DVec2,
    /// Direction vector.
    pub direction: DVec2,
}

/// Arguments extracted for a parsed command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandArgs {
    None,
    File(PathBuf),
    Place(PlaceArgs),
}

/// Parse one raw input line into a command and its arguments.
///
/// Empty and whitespace-only lines parse to `Ok(None)`. Malformed input is
/// reported through [`ParseError`]; the caller decides how to surface the
/// diagnostic. The path of a FILE command is captured as-is; whether it names
/// a readable file is checked at dispatch time.
pub fn parse(input: &str) -> Result<Option<(Command, CommandArgs)>, ParseError> {
    let cleaned = input.trim();
    if cleaned.is_empty() {
        return Ok(None);
    }

    // All commands are of form <COMMAND> or <COMMAND> <ARGS>.
    let pieces: Vec<&str> = cleaned.split(' ').collect();
    if pieces.len() > 2 {
        return Err(ParseError::Format);
    }

    let command = Command::from_token(pieces[0])
        .ok_or_else(|| ParseError::UnknownCommand(pieces[0].to_string()))?;

    let args = match command {
        Command::File => {
            let raw = pieces.get(1).ok_or(ParseError::MissingArgs(command))?;
            CommandArgs::File(PathBuf::from(raw))
        }
        Command::Place => {
            let raw = pieces.get(1).ok_or(ParseError::MissingArgs(command))?;
            CommandArgs::Place(parse_place_args(command, raw)?)
        }
        // A stray second token after an argument-less command is ignored.
        _ => CommandArgs::None,
    };

    Ok(Some((command, args)))
}

fn parse_place_args(command: Command, raw: &str) -> Result<PlaceArgs, ParseError> {
    let bad_args = || ParseError::BadArgs {
        command,
        args: raw.to_string(),
    };

    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != 3 {
        return Err(bad_args());
    }

    let x: f64 = fields[0].parse().map_err(|_| bad_args())?;
    let y: f64 = fields[1].parse().map_err(|_| bad_args())?;
    let direction = Direction::from_token(fields[2]).ok_or_else(bad_args)?;

    Ok(PlaceArgs {
        position: DVec2::new(x, y),
        direction: direction.as_vec(),
    })
}
