//! Error types for the truepath library.
//!
//! This module provides the error hierarchy for all operations in the
//! truepath library, using `thiserror` for ergonomic error handling.
//!
//! Note that most conditions other libraries treat as errors are resolution
//! non-events here: nonexistent paths, broken links, and symlink cycles all
//! canonicalize successfully. The variants below cover genuine failures only.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a truepath error.
///
/// # Examples
///
/// ```
/// use truepath::{Error, Result};
/// use std::path::PathBuf;
///
/// fn example_operation() -> Result<PathBuf> {
///     Ok(PathBuf::from("/"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the truepath library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A link-target read was attempted on an entry that is not a symlink.
    #[error("not a symlink: {}", path.display())]
    NotALink {
        /// The path that is not a symlink.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates the entry was not a symlink.
    ///
    /// # Examples
    ///
    /// ```
    /// use truepath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotALink { path: PathBuf::from("/etc/hosts") };
    /// assert!(err.is_not_a_link());
    /// ```
    #[must_use]
    pub fn is_not_a_link(&self) -> bool {
        matches!(self, Self::NotALink { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use truepath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
