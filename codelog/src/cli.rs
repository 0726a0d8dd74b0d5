//! Command-line argument parsing.
//!
//! Usage:
//!   codelog [FILE] [--color <auto|always|never>] [-v]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Path run when no script is named on the command line.
pub const DEFAULT_SCRIPT: &str = "src/codelog.prc";

/// Parsed command-line arguments.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "codelog")]
#[command(about = "Run a code-log (.prc) script")]
#[command(version)]
pub struct CliArgs {
    /// Script to run
    #[arg(value_name = "FILE", default_value = DEFAULT_SCRIPT)]
    pub script: PathBuf,

    /// When to colour error reports
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Log interpreter diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// The `--color` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Colour when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Parse `std::env::args()`, exiting with usage on error.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
