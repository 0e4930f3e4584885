//! # fmf CLI
//!
//! This is the binary entry point for the `fmf` command-line tool: a thin
//! wrapper over the `fmf` library crate that parses arguments, dispatches to
//! a command implementation, and translates errors into a one-line
//! diagnostic and an exit code (see `fmf::exit_codes`).

mod cli;
mod commands;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    let debug = cli.debug();

    if let Err(err) = cli.execute() {
        if debug {
            eprintln!("{err:?}");
        } else {
            eprintln!("error: {err}");
        }
        std::process::exit(fmf::exit_codes::ERROR);
    }
}
