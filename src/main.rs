// mkproj - project scaffolding tool
// Main CLI entry point

use clap::Parser;
use mkproj::cli::{Cli, CliDispatcher};
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = CliDispatcher::execute(cli.command) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
