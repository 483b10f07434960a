//! Path canonicalization with symlink-cycle tolerance.
//!
//! This module provides the core of the truepath library: computing the
//! canonical form of an arbitrary path string.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization is purely lexical. It converts a path to absolute form by:
//! - Expanding tilde (~) to the home directory
//! - Joining relative paths against a base directory
//! - Collapsing `.` and `..` components
//!
//! No filesystem access takes place and symlinks are left untouched.
//!
//! ## Link Resolution
//!
//! [`resolve_link`] follows one chain of symlinks, one hop at a time, until
//! it reaches a non-link path, a broken link, or a path it has already
//! visited. It never fails on cycles; the first repeated path is the answer.
//!
//! ## Canonicalization
//!
//! [`canonicalize`] drives component-by-component resolution of a full path,
//! feeding each component boundary through the link resolver and re-expanding
//! its work queue whenever a link target spans multiple components. A seen
//! set of attempted candidate paths guarantees termination on cycles that
//! span several components, not just single self-referential links.
//!
//! # Examples
//!
//! ```no_run
//! use truepath::path::canonicalize;
//! use std::path::Path;
//!
//! // Works whether or not any component exists
//! let canonical = canonicalize(Path::new("./build/../target")).unwrap();
//! assert!(canonical.is_absolute());
//! ```

pub mod canonicalize;
pub mod normalize;
pub mod relative;
pub mod resolve;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key functions
pub use canonicalize::{canonicalize, canonicalize_from};
pub use relative::relative_from;
pub use resolve::resolve_link;
