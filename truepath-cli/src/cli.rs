//! CLI structure and argument definitions.
//!
//! This module defines the command-line surface using clap's derive macros.
//! There are no subcommands: the tool does one thing, like `realpath`.

use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

/// Print canonical, symlink-resolved paths.
#[derive(Parser)]
#[command(name = "truepath")]
#[command(
    version,
    about = "Print canonical, symlink-resolved paths",
    long_about = "Print the canonical form of each PATH: absolute, lexically \
                  normalized, with every symlink transitively resolved. \
                  Nonexistent paths, broken links, and symlink cycles all \
                  resolve successfully instead of erroring."
)]
pub struct Cli {
    /// Paths to canonicalize (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Resolve `.` and `..` lexically without following symlinks
    #[arg(long)]
    pub logical: bool,

    /// Print results relative to this directory
    #[arg(long, value_name = "DIR")]
    pub relative_to: Option<PathBuf>,

    /// Terminate output entries with NUL instead of newline
    #[arg(short = 'z', long)]
    pub zero: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,
}
