mod board;
mod command;
mod common;
mod config;
mod controller;
mod heading;
mod logging;
mod rover;

pub use board::*;
pub use command::*;
pub use common::*;
pub use config::*;
pub use controller::*;
pub use heading::*;
pub use logging::init_logging;
pub use rover::*;
