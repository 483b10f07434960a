//! Path canonicalization: normalization plus transitive symlink resolution.
//!
//! This module computes the canonical form of an arbitrary path: the
//! normalized, absolute path with every symbolic link transitively resolved.
//! Unlike `std::fs::canonicalize` it never fails on nonexistent components,
//! broken links, or symlink cycles:
//! - Components that do not exist (or cannot be inspected) pass through as
//!   ordinary directory segments.
//! - Cycles terminate deterministically at the first repeated candidate
//!   path, which is accepted as canonical.
//!
//! Only a genuine I/O failure while reading a link target (e.g. permission
//! denied) propagates as an error.

use std::collections::{HashSet, VecDeque};
use std::env;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize::normalize_from;
use crate::path::relative::relative_from;
use crate::path::resolve::resolve_link;

/// Canonicalize a path against the current working directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined, or if
/// reading a link target fails for a reason other than "not a link".
///
/// # Examples
///
/// ```no_run
/// use truepath::canonicalize;
/// use std::path::Path;
///
/// // The path does not need to exist
/// let canonical = canonicalize(Path::new("./does/not/exist")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("cannot get current directory: {e}"),
    })?;
    canonicalize_from(path, &cwd)
}

/// Canonicalize a path against an explicit base directory.
///
/// Relative inputs are interpreted against `base`, which must be absolute.
///
/// The resolution state is three-part: a canonical prefix (everything fully
/// resolved so far), a queue of components still to resolve, and a set of
/// every full candidate path attempted during this call. Each iteration
/// resolves one component boundary through [`resolve_link`] and folds the
/// result back in:
/// - a resolved path equal to the prefix is a self-reference and is dropped;
/// - a resolved path on a different root restarts resolution from that root,
///   unless that exact path was already attempted, in which case it is
///   accepted as canonical (cycle break);
/// - otherwise leading `..` segments walk the prefix upward, a single
///   remaining segment extends the prefix, and a multi-segment remainder is
///   pushed back onto the queue for component-by-component resolution --
///   again accepted outright if it was already attempted.
///
/// The loop is iterative, never recursive, so adversarial link graphs cannot
/// exhaust the stack. Deferred work — a cross-root restart or a multi-segment
/// expansion pushed back onto the queue — is recorded in the seen set along
/// with the per-iteration candidates, so every cyclic link graph eventually
/// repeats a recorded path and takes an accept branch.
///
/// # Errors
///
/// Returns an error if `base` is relative, or if reading a link target
/// fails for a reason other than "not a link".
///
/// # Examples
///
/// ```
/// use truepath::canonicalize_from;
/// use std::path::{Path, PathBuf};
///
/// let canonical = canonicalize_from(Path::new("a/../b"), Path::new("/base")).unwrap();
/// assert_eq!(canonical, PathBuf::from("/base/b"));
/// ```
pub fn canonicalize_from(path: &Path, base: &Path) -> Result<PathBuf> {
    let absolute = normalize_from(path, base)?;
    let (mut prefix, mut queue) = split_root(&absolute);
    let mut seen: HashSet<PathBuf> = HashSet::new();

    while let Some(part) = queue.pop_front() {
        // Record the full candidate for this state so a later expansion that
        // arrives back here is recognized as a cycle.
        let mut candidate = prefix.join(&part);
        for segment in &queue {
            candidate.push(segment);
        }
        seen.insert(candidate);

        let resolved = resolve_link(&prefix.join(&part))?;
        let relative = relative_from(&resolved, &prefix);

        // Link pointing back at its own containing directory
        if relative.as_os_str().is_empty() {
            continue;
        }

        // Resolution jumped to a different root
        if relative.is_absolute() {
            if seen.contains(&resolved) {
                log::debug!("cross-root cycle at {}", resolved.display());
                prefix = resolved;
                queue.clear();
                continue;
            }
            let (new_prefix, head) = split_root(&resolved);
            prefix = new_prefix;
            for segment in head.into_iter().rev() {
                queue.push_front(segment);
            }
            // Record the deferred restart target itself: candidates recorded
            // at the top of the loop carry the pending tail, so a cycle back
            // to this root would otherwise never repeat one of them.
            seen.insert(resolved);
            continue;
        }

        let mut segments: VecDeque<OsString> = VecDeque::new();
        for component in relative.components() {
            match component {
                // Leading ".." walks the prefix up one level, clamped at the
                // root (popping the root is a no-op).
                Component::ParentDir if segments.is_empty() => {
                    prefix.pop();
                }
                _ => segments.push_back(component.as_os_str().to_os_string()),
            }
        }

        match segments.len() {
            // Target was an ancestor of the prefix; the pops above did it all
            0 => {}
            // resolve_link guarantees a non-link leaf
            1 => prefix.push(&segments[0]),
            // The target spans several components; each needs resolution
            _ => {
                let mut subpath = prefix.clone();
                for segment in &segments {
                    subpath.push(segment);
                }
                if seen.contains(&subpath) {
                    log::debug!("cycle at {}", subpath.display());
                    prefix = subpath;
                } else {
                    for segment in segments.into_iter().rev() {
                        queue.push_front(segment);
                    }
                    // Record the deferred expansion too. A cyclic target with
                    // a pending tail grows the queue every pass, so the full
                    // candidates above stay distinct forever; the bare
                    // sub-path is what repeats, and its second arrival must
                    // take the accept branch.
                    seen.insert(subpath);
                }
            }
        }
    }

    Ok(prefix)
}

/// Split a normalized absolute path into its root and remaining components.
fn split_root(path: &Path) -> (PathBuf, VecDeque<OsString>) {
    let mut root = PathBuf::new();
    let mut rest = VecDeque::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => root.push(component.as_os_str()),
            Component::Normal(c) => rest.push_back(c.to_os_string()),
            // Normalized input carries no "." components, and any leading
            // ".." was clamped at the root.
            Component::CurDir | Component::ParentDir => {}
        }
    }
    (root, rest)
}
