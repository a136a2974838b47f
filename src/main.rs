// xcgen - Xcode project generator and patcher
// Main CLI entry point

use clap::Parser;
use std::process;
use xcgen::cli::{Cli, CliDispatcher};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = CliDispatcher::execute(cli.command) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
