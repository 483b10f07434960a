//! Relative-path computation between absolute paths.
//!
//! The canonicalizer expresses every resolved component relative to its
//! canonical prefix; the shape of that relative path (empty, relative, or
//! still absolute) is what drives its state machine. The cross-root signal
//! in particular is deliberately platform-agnostic: roots are compared as
//! opaque component prefixes, so drive letters, UNC shares and the POSIX
//! root all behave identically.

use std::path::{Component, Path, PathBuf};

/// Express `path` relative to `base`.
///
/// Both inputs are expected to be lexically normalized absolute paths (see
/// [`collapse_dots`](crate::path::normalize::collapse_dots)).
///
/// Three outcomes are possible:
/// - an empty path when `path` and `base` are equal;
/// - a relative path, possibly starting with `..` components, when the two
///   share a root;
/// - `path` itself, unchanged and still absolute, when the two share no
///   common root. Callers use this as the cross-root signal.
///
/// # Examples
///
/// ```
/// use truepath::path::relative_from;
/// use std::path::{Path, PathBuf};
///
/// let rel = relative_from(Path::new("/a/b/c"), Path::new("/a/x"));
/// assert_eq!(rel, PathBuf::from("../b/c"));
///
/// let same = relative_from(Path::new("/a/b"), Path::new("/a/b"));
/// assert!(same.as_os_str().is_empty());
/// ```
#[must_use]
pub fn relative_from(path: &Path, base: &Path) -> PathBuf {
    if root_of(path) != root_of(base) {
        return path.to_path_buf();
    }

    let mut path_iter = path.components();
    let mut base_iter = base.components();
    let mut segments: Vec<Component> = Vec::new();

    loop {
        match (path_iter.next(), base_iter.next()) {
            (None, None) => break,
            (Some(p), None) => {
                segments.push(p);
                segments.extend(path_iter);
                break;
            }
            (None, Some(_)) => segments.push(Component::ParentDir),
            (Some(p), Some(b)) if segments.is_empty() && p == b => {}
            (Some(p), Some(_)) => {
                segments.push(Component::ParentDir);
                for _ in base_iter {
                    segments.push(Component::ParentDir);
                }
                segments.push(p);
                segments.extend(path_iter);
                break;
            }
        }
    }

    segments.iter().map(|c| c.as_os_str()).collect()
}

/// The root of a path: its leading prefix and root-directory components.
///
/// Empty for relative paths. Two absolute paths live on the same root iff
/// their roots compare equal.
fn root_of(path: &Path) -> PathBuf {
    path.components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect()
}
