//! # CLI Argument Parsing and Command Dispatch
//!
//! Defines the top-level `fmf` command line, using `clap`'s derive macros
//! the same way the rest of this command surface does. Global flags
//! (`--verbose`, `--debug`) apply to every subcommand; each subcommand's own
//! arguments live in its module under `src/commands/`.
//!
//! Context (the dimension/version mapping `when` expressions evaluate
//! against) is a library-level concept only — per §6 of the design, the CLI
//! does not itself ingest a context from the environment, so no subcommand
//! here exposes a `--context` flag.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use crate::commands;

/// fmf - Flexible Metadata Format tree builder and query tool
#[derive(Parser, Debug)]
#[command(name = "fmf")]
#[command(
    version,
    about,
    long_about = "Build, adjust and query a hierarchical metadata tree assembled from YAML files"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase output verbosity (can be repeated: -v -v)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Re-raise the original error instead of a one-line diagnostic on
    /// failure, and enable trace-level logging.
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new tree root (`.fmf/version`) in the current directory
    Init(commands::init::InitArgs),

    /// List node names matching the given selection
    Ls(commands::ls::LsArgs),

    /// Like `ls`, but also print each matching node's attributes
    Show(commands::show::ShowArgs),

    /// Remove the configured cache directory
    Clean(commands::clean::CleanArgs),
}

impl Cli {
    /// Whether `--debug` was passed; read before `execute` consumes `self`.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Execute the parsed CLI command.
    pub fn execute(self) -> Result<()> {
        self.init_logger();

        match self.command {
            Commands::Init(args) => commands::init::execute(args),
            Commands::Ls(args) => commands::ls::execute(args),
            Commands::Show(args) => commands::show::execute(args),
            Commands::Clean(args) => commands::clean::execute(args),
        }
    }

    fn init_logger(&self) {
        let level = self.log_level();
        env_logger::Builder::from_default_env()
            .filter_level(level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .try_init()
            .ok();
    }

    fn log_level(&self) -> LevelFilter {
        if self.debug {
            return LevelFilter::Trace;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
