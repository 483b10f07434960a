//! Filesystem metadata queries consumed by the canonicalization core.
//!
//! The canonicalizer needs exactly two facts from the filesystem: whether a
//! path names a symbolic-link entry, and what target string that entry
//! stores. Everything else it does is pure path-string computation. Both
//! queries are read-only and safe for concurrent use.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Check whether a symbolic-link entry exists at `path`.
///
/// Returns `true` regardless of whether the link's target exists: a broken
/// link is still a link. Returns `false` for nonexistent paths, for plain
/// files and directories, and for paths whose metadata cannot be read at
/// all (the caller treats those as ordinary non-link components).
///
/// # Examples
///
/// ```
/// use truepath::fs::is_link;
/// use std::path::Path;
///
/// assert!(!is_link(Path::new("/no/such/path/anywhere")));
/// ```
#[must_use]
pub fn is_link(path: &Path) -> bool {
    std::fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}

/// Read the literal stored target of the symlink at `path`.
///
/// The target is returned exactly as stored, relative or absolute; it is
/// interpreted relative to the link's containing directory by the caller.
///
/// # Errors
///
/// Returns an error if:
/// - `path` is not a symlink (`NotALink`)
/// - Permission is denied (`PermissionDenied`)
/// - Any other I/O error occurs
pub fn read_link_target(path: &Path) -> Result<PathBuf> {
    std::fs::read_link(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidInput | ErrorKind::NotFound => Error::NotALink {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}
