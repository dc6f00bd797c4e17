//! Plate Gate - license plate access control CLI
//!
//! Runs the plate decision pipeline against uploaded images or
//! pre-detected OCR text.

use clap::Parser;
use plate_gate::cli::Cli;
use plate_gate::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
