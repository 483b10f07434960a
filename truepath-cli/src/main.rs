//! Main entry point for the truepath CLI.
//!
//! A `realpath`-style front end over the truepath library: prints the
//! canonical, symlink-resolved form of each argument. Unlike the system
//! `realpath`, it succeeds on nonexistent paths, broken links, and symlink
//! cycles.

mod cli;
mod error;
mod output;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use truepath::path::{normalize, relative_from};
use truepath::{canonicalize, Logger};

use crate::cli::Cli;
use crate::error::CliError;
use crate::output::{OutputFormat, Resolution};

fn main() {
    let cli = Cli::parse();
    let logger = truepath::init_logger(cli.verbose, cli.quiet);

    match run(&cli, &logger) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli, logger: &Logger) -> Result<(), CliError> {
    if cli.zero && cli.format == OutputFormat::Json {
        return Err(CliError::InvalidArguments(
            "--zero cannot be combined with --format json".to_string(),
        ));
    }

    let paths = if cli.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli.paths.clone()
    };

    let base = match &cli.relative_to {
        Some(dir) => {
            let resolved = resolve_one(dir, cli.logical)?;
            if !resolved.exists() {
                logger.warn(&format!(
                    "base directory {} does not exist",
                    resolved.display()
                ));
            }
            Some(resolved)
        }
        None => None,
    };

    let mut resolutions = Vec::with_capacity(paths.len());
    for input in paths {
        let mut canonical = resolve_one(&input, cli.logical)?;
        if !canonical.exists() {
            logger.debug(&format!("{} does not exist", canonical.display()));
        }
        if let Some(base) = &base {
            canonical = rebase(&canonical, base);
        }
        resolutions.push(Resolution { input, canonical });
    }

    let rendered = output::render(&resolutions, cli.format, cli.zero)?;
    io::stdout().write_all(rendered.as_bytes())?;
    Ok(())
}

/// Canonicalize one path, or only normalize it in `--logical` mode.
fn resolve_one(path: &Path, logical: bool) -> Result<PathBuf, CliError> {
    let resolved = if logical {
        normalize::normalize(path)
    } else {
        canonicalize(path)
    };
    resolved.map_err(CliError::from)
}

/// Express a canonical path relative to the `--relative-to` base.
fn rebase(path: &Path, base: &Path) -> PathBuf {
    let rel = relative_from(path, base);
    if rel.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        rel
    }
}
