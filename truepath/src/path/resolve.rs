//! Transitive symlink resolution for a single path.
//!
//! This module follows one chain of symlinks to its end, one hop at a time,
//! without requiring that any path in the chain exist. It is the inner loop
//! of the canonicalizer: the outer state machine calls it once per component
//! boundary.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs;
use crate::path::normalize::collapse_dots;

/// Follow the chain of symlinks starting at `path` until it ends.
///
/// Each iteration reads one link target and rebases it against the link's
/// containing directory, collapsing `.` and `..` lexically. The loop stops
/// at the first path that is not a symlink entry (including broken-link
/// targets and paths that do not exist at all), or at the first path seen
/// twice. In the repeated case the repeated path itself is returned: a link
/// pointing at itself, or two links pointing at each other, resolve to the
/// first path re-encountered rather than erroring.
///
/// Termination is guaranteed: every iteration either returns or grows the
/// visited set, which is bounded by the number of distinct links reachable
/// from `path`.
///
/// # Errors
///
/// Returns an error only for genuine I/O failures while reading a link
/// target (e.g. permission denied), or if a link somehow has no parent
/// directory to rebase a relative target against.
///
/// # Examples
///
/// ```
/// use truepath::resolve_link;
/// use std::path::{Path, PathBuf};
///
/// // Not a link (and doesn't exist): returned unchanged
/// let path = Path::new("/no/such/entry");
/// assert_eq!(resolve_link(path).unwrap(), PathBuf::from("/no/such/entry"));
/// ```
pub fn resolve_link(path: &Path) -> Result<PathBuf> {
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut current = path.to_path_buf();

    loop {
        if !fs::is_link(&current) {
            return Ok(current);
        }
        if !visited.insert(current.clone()) {
            // Second visit to the same link: a direct cycle
            log::debug!("symlink cycle at {}", current.display());
            return Ok(current);
        }

        let target = fs::read_link_target(&current)?;
        log::trace!("{} -> {}", current.display(), target.display());

        current = if target.is_absolute() {
            collapse_dots(&target)
        } else {
            let dir = current.parent().ok_or_else(|| Error::InvalidPath {
                path: current.clone(),
                reason: "symlink has no parent directory".to_string(),
            })?;
            collapse_dots(&dir.join(target))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_link_nonexistent() {
        let path = Path::new("/nonexistent/path/xyz");
        assert_eq!(resolve_link(path).unwrap(), path);
    }

    #[test]
    fn test_resolve_link_plain_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain");
        stdfs::write(&file, "data").unwrap();
        assert_eq!(resolve_link(&file).unwrap(), file);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_link_single_hop() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");

        stdfs::create_dir(&target).unwrap();
        symlink(&target, &link).unwrap();

        assert_eq!(resolve_link(&link).unwrap(), target);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_link_chain() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("real");
        let mid = dir.path().join("mid");
        let head = dir.path().join("head");

        stdfs::create_dir(&target).unwrap();
        symlink(&target, &mid).unwrap();
        symlink(&mid, &head).unwrap();

        assert_eq!(resolve_link(&head).unwrap(), target);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_link_relative_target() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let sibling = dir.path().join("sibling");
        let sub = dir.path().join("sub");
        let link = sub.join("link");

        stdfs::create_dir(&sibling).unwrap();
        stdfs::create_dir(&sub).unwrap();
        symlink("../sibling", &link).unwrap();

        assert_eq!(resolve_link(&link).unwrap(), sibling);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_link_broken_target() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let link = dir.path().join("dangling");
        let missing = dir.path().join("missing");
        symlink(&missing, &link).unwrap();

        // The broken target is the end of the chain, not an error
        assert_eq!(resolve_link(&link).unwrap(), missing);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_link_self_cycle() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let link = dir.path().join("narcissus");
        symlink(&link, &link).unwrap();

        // Revisited on the second iteration; returned, not an error
        assert_eq!(resolve_link(&link).unwrap(), link);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_link_two_cycle() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        symlink(&b, &a).unwrap();
        symlink(&a, &b).unwrap();

        // Starting at a: visit a, hop to b, hop back to a, detect repeat
        assert_eq!(resolve_link(&a).unwrap(), a);
        assert_eq!(resolve_link(&b).unwrap(), b);
    }
}
