#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # truepath
//!
//! A library for symlink-safe path canonicalization.
//!
//! Unlike the operating system's `realpath`, which fails outright on
//! nonexistent paths, broken links, and symlink cycles, this library always
//! produces a canonical path: the normalized, absolute form of the input with
//! every symbolic link transitively resolved, terminating deterministically
//! even on self-referential or mutually cyclic links.
//!
//! ## Core Functions
//!
//! - [`canonicalize`]: Resolve a path against the current working directory
//! - [`canonicalize_from`]: Resolve a path against an explicit base directory
//! - [`resolve_link`]: Follow a single chain of symlinks to its end
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use truepath::canonicalize_from;
//! use std::path::{Path, PathBuf};
//!
//! // No component of the input needs to exist.
//! let canonical = canonicalize_from(
//!     Path::new("missing/./dir/../file"),
//!     Path::new("/base"),
//! ).unwrap();
//! assert_eq!(canonical, PathBuf::from("/base/missing/file"));
//! ```

pub mod error;
pub mod fs;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{canonicalize, canonicalize_from, resolve_link};
