//! Property-based tests for path handling.
//!
//! The normalize module already has example-based coverage; this module
//! checks the structural guarantees of the lexical utilities and of
//! canonicalization over generated inputs. Canonicalization inputs live
//! under a `zz-`-prefixed shadow root so that no generated component can
//! collide with a real filesystem entry, even when `..` climbs out of the
//! shadow directory; resolution is therefore purely lexical and
//! deterministic.

use proptest::prelude::*;
use std::path::{Component, PathBuf};

use super::canonicalize::canonicalize_from;
use super::normalize::collapse_dots;
use super::relative::relative_from;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn dotted_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            path_component_strategy(),
        ],
        1..=8,
    )
    .prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

// Absolute paths whose every normal component is prefixed "zz-", rooted in
// a "zz-" shadow directory, so nothing generated can exist on disk.
fn shadowed_dotted_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            "[a-z0-9]{1,8}".prop_map(|s| format!("zz-{s}")),
        ],
        1..=8,
    )
    .prop_map(|parts| {
        let mut path = PathBuf::from("/zz-truepath-shadow");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Collapsing dots is idempotent
    #[test]
    fn collapse_dots_idempotent(path in dotted_path_strategy()) {
        let once = collapse_dots(&path);
        let twice = collapse_dots(&once);
        prop_assert_eq!(once, twice);
    }

    // Collapsed absolute paths contain no dot components
    #[test]
    fn collapse_dots_removes_dots(path in dotted_path_strategy()) {
        let collapsed = collapse_dots(&path);
        for component in collapsed.components() {
            prop_assert_ne!(component, Component::CurDir);
            prop_assert_ne!(component, Component::ParentDir);
        }
    }

    // Collapsing preserves absoluteness
    #[test]
    fn collapse_dots_preserves_absolute(path in dotted_path_strategy()) {
        prop_assert!(collapse_dots(&path).is_absolute());
    }

    // Rejoining a relative path onto its base recovers the original
    #[test]
    fn relative_from_roundtrip(
        path in absolute_path_strategy(),
        base in absolute_path_strategy(),
    ) {
        let rel = relative_from(&path, &base);
        prop_assert_eq!(collapse_dots(&base.join(rel)), path);
    }

    // Canonicalizing a path with no existing components equals its
    // lexically normalized absolute form
    #[test]
    fn canonicalize_nonexistent_is_lexical(path in shadowed_dotted_strategy()) {
        let canonical = canonicalize_from(&path, std::path::Path::new("/")).unwrap();
        prop_assert_eq!(canonical, collapse_dots(&path));
    }

    // Canonicalization is idempotent
    #[test]
    fn canonicalize_idempotent(path in shadowed_dotted_strategy()) {
        let once = canonicalize_from(&path, std::path::Path::new("/")).unwrap();
        let twice = canonicalize_from(&once, std::path::Path::new("/")).unwrap();
        prop_assert_eq!(once, twice);
    }

    // Canonical paths are always absolute
    #[test]
    fn canonicalize_always_absolute(path in shadowed_dotted_strategy()) {
        let canonical = canonicalize_from(&path, std::path::Path::new("/")).unwrap();
        prop_assert!(canonical.is_absolute());
    }
}
