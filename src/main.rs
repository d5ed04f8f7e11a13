use std::io::{self, Write};

use clap::Parser;
use toyrover::{init_logging, Board, ControlSignal, Controller, DEFAULT_BOARD_SIZE};

/// Simulate a rover on a bounded board, driven by text commands.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board extent along the x axis.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    width: f64,
    /// Board extent along the y axis.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    println!("Starting ToyRover Simulator.");
    println!("Type HELP to see all available commands");

    let board = Board::new(cli.width, cli.height);
    let mut controller = Controller::new(board, io::stdout());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter Command > ");
        io::stdout().flush()?;
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            // End of input behaves like EXIT.
            break;
        }
        if controller.process_line(&line)? == ControlSignal::Stop {
            break;
        }
    }
    Ok(())
}
