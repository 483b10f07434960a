//! Output formatting for resolution results.
//!
//! Text output prints one canonical path per entry, newline- or
//! NUL-terminated. JSON output pairs each input with its canonical form so
//! batch callers can correlate results.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::CliError;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One canonical path per line.
    Text,
    /// A JSON array of input/canonical pairs.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// One resolved path: the input as given and its canonical form.
#[derive(Debug, Serialize)]
pub struct Resolution {
    /// The path as provided on the command line.
    pub input: PathBuf,
    /// Its canonical (or, with `--logical`, normalized) form.
    pub canonical: PathBuf,
}

/// Render resolutions in the requested format.
///
/// `zero` switches the text terminator from newline to NUL; it is ignored
/// for JSON (the caller rejects that combination up front).
pub fn render(
    resolutions: &[Resolution],
    format: OutputFormat,
    zero: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => {
            let terminator = if zero { '\0' } else { '\n' };
            let mut out = String::new();
            for resolution in resolutions {
                out.push_str(&resolution.canonical.display().to_string());
                out.push(terminator);
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(resolutions)
                .map_err(|e| CliError::Io(e.into()))?;
            out.push('\n');
            Ok(out)
        }
    }
}
