//! Lexical path normalization.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//! - Collapsing `.` and `..` components
//!
//! Normalization never touches the filesystem: symlinks are not followed,
//! and no component of the path needs to exist.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user`
/// syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use truepath::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// // Paths without a tilde pass through unchanged
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Collapse `.` and `..` components lexically.
///
/// A `..` that would walk above the root is clamped at the root, matching
/// `realpath` semantics: `/..` is `/`. On a relative path, leading `..`
/// components that have nothing to cancel are kept. An empty result
/// becomes `.`.
///
/// # Examples
///
/// ```
/// use truepath::path::normalize::collapse_dots;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(collapse_dots(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(collapse_dots(Path::new("/a/../..")), PathBuf::from("/"));
/// assert_eq!(collapse_dots(Path::new("../a/..")), PathBuf::from(".."));
/// assert_eq!(collapse_dots(Path::new("a/..")), PathBuf::from("."));
/// ```
#[must_use]
pub fn collapse_dots(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    // Count of normal components currently in `result` that a ".." may cancel
    let mut depth: usize = 0;
    let mut rooted = false;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                rooted = true;
            }
            Component::RootDir => {
                result.push(component);
                rooted = true;
            }
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                } else if !rooted {
                    // Relative path with nothing left to cancel
                    result.push(component);
                }
                // Rooted with depth 0: ".." at the root stays at the root
            }
        }
    }

    if result.as_os_str().is_empty() {
        result.push(Component::CurDir);
    }

    result
}

/// Normalize a path to absolute form against an explicit base directory.
///
/// This is the main normalization function:
/// 1. Expands tilde (~) if present
/// 2. Joins relative paths against `base`
/// 3. Collapses `.` and `..` components
///
/// # Errors
///
/// Returns an error if tilde expansion fails or if `base` is not absolute.
///
/// # Examples
///
/// ```
/// use truepath::path::normalize::normalize_from;
/// use std::path::{Path, PathBuf};
///
/// let normalized = normalize_from(Path::new("src/../doc"), Path::new("/work")).unwrap();
/// assert_eq!(normalized, PathBuf::from("/work/doc"));
/// ```
pub fn normalize_from(path: &Path, base: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        if !base.is_absolute() {
            return Err(Error::InvalidPath {
                path: base.to_path_buf(),
                reason: "base directory must be absolute".to_string(),
            });
        }
        base.join(expanded)
    };

    Ok(collapse_dots(&absolute))
}

/// Normalize a path to absolute form against the current working directory.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the current directory
/// cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use truepath::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("./src")).unwrap();
/// assert!(normalized.is_absolute());
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("cannot get current directory: {e}"),
    })?;
    normalize_from(path, &cwd)
}
