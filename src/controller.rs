//! Command dispatch and rover lifecycle management.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::debug;

use crate::board::Board;
use crate::command::{self, Command, CommandArgs, PlaceArgs};
use crate::config::{MOVE_DISTANCE, ROTATE_ANGLE_DEG};
use crate::rover::Rover;

const NO_ROVER_MSG: &str = "No rover present, place a rover first!";

/// Whether the outer input loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    Continue,
    Stop,
}

/// Central entry point for driving the simulation.
///
/// Owns the board and the rover (created lazily on the first successful
/// PLACE). Feed raw input lines to [`process_line`](Self::process_line); all
/// simulator output, diagnostics included, is written to the sink handed in
/// at construction.
pub struct Controller<W: Write> {
    board: Board,
    rover: Option<Rover>,
    out: W,
}

impl<W: Write> Controller<W> {
    pub fn new(board: Board, out: W) -> Self {
        Self {
            board,
            rover: None,
            out,
        }
    }

    /// Returns `true` once a rover has been successfully placed.
    pub fn has_rover(&self) -> bool {
        self.rover.is_some()
    }

    /// The rover, if one has been placed.
    pub fn rover(&self) -> Option<&Rover> {
        self.rover.as_ref()
    }

    /// Parse and execute one raw input line.
    ///
    /// A malformed line prints its diagnostic and yields `Continue`; an empty
    /// line is silently skipped.
    pub fn process_line(&mut self, line: &str) -> io::Result<ControlSignal> {
        match command::parse(line) {
            Ok(Some((command, args))) => self.run_command(command, args),
            Ok(None) => Ok(ControlSignal::Continue),
            Err(err) => {
                writeln!(self.out, "{}", err)?;
                Ok(ControlSignal::Continue)
            }
        }
    }

    /// Execute a parsed command.
    pub fn run_command(
        &mut self,
        command: Command,
        args: CommandArgs,
    ) -> io::Result<ControlSignal> {
        debug!("dispatching {}", command);
        match (command, args) {
            (Command::File, CommandArgs::File(path)) => self.handle_file(&path)?,
            (Command::Place, CommandArgs::Place(place_args)) => self.handle_place(place_args)?,
            (Command::Move, _) => match self.rover.as_mut() {
                Some(rover) => {
                    if let Err(err) = rover.advance(MOVE_DISTANCE) {
                        writeln!(self.out, "{}", err)?;
                    }
                }
                None => writeln!(self.out, "{}", NO_ROVER_MSG)?,
            },
            (Command::Left, _) => match self.rover.as_mut() {
                Some(rover) => rover.rotate_left(ROTATE_ANGLE_DEG),
                None => writeln!(self.out, "{}", NO_ROVER_MSG)?,
            },
            (Command::Right, _) => match self.rover.as_mut() {
                Some(rover) => rover.rotate_right(ROTATE_ANGLE_DEG),
                None => writeln!(self.out, "{}", NO_ROVER_MSG)?,
            },
            (Command::Report, _) => match self.rover.as_ref() {
                Some(rover) => writeln!(self.out, "{}", rover.report())?,
                None => writeln!(self.out, "{}", NO_ROVER_MSG)?,
            },
            (Command::Help, _) => self.print_help()?,
            (Command::Exit, _) => return Ok(ControlSignal::Stop),
            // Unreachable from `parse`, but `run_command` is public: a
            // command paired with the wrong argument variant is reported
            // rather than acted on.
            (command, _) => writeln!(self.out, "Error: Command {} not supported.", command)?,
        }
        Ok(ControlSignal::Continue)
    }

    /// Execute every line of the file at `path` as if it were typed input.
    ///
    /// An unreadable path prints a diagnostic and leaves all state unchanged.
    /// Control signals from the file's commands are discarded: an EXIT inside
    /// a file stops neither the file nor the outer loop.
    fn handle_file(&mut self, path: &Path) -> io::Result<()> {
        debug!("executing command file {}", path.display());
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                writeln!(self.out, "Unable to read file '{}': {}", path.display(), err)?;
                return Ok(());
            }
        };
        for line in contents.lines() {
            self.process_line(line)?;
        }
        Ok(())
    }

    /// Place the rover, creating it if this is the first valid placement.
    fn handle_place(&mut self, args: PlaceArgs) -> io::Result<()> {
        let result = match self.rover.as_mut() {
            Some(rover) => rover.place(args.position, args.direction),
            None => Rover::new(self.board, args.position, args.direction).map(|rover| {
                debug!("rover created at {}", args.position);
                self.rover = Some(rover);
            }),
        };
        if let Err(err) = result {
            writeln!(self.out, "{}", err)?;
        }
        Ok(())
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "List of commands:")?;
        for command in Command::ALL {
            writeln!(self.out, "\t{}\t{}", command, command.description())?;
        }
        Ok(())
    }
}
