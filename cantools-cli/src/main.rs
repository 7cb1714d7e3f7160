//! Command-line interface for decoding CAN frames against DBC files.

mod commands;

use clap::Parser;
use commands::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute_command(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
