//! Path-based scope classification.
//!
//! Two independent questions, answered by two pure functions:
//!
//! - [`consumer_scope`] — is this file consumer code, a demonstration file,
//!   excluded infrastructure, or unresolvable? Import-policy detectors key
//!   off this split.
//! - [`is_library_source`] — is this file part of the design-system library
//!   itself? Attribute-restriction detectors need this second split, which
//!   is deliberately not folded into the first.
//!
//! Deny takes precedence over allow, and every malformed input classifies
//! conservatively: detectors see `Unresolvable` and no-op.

use crate::utils::paths::{file_name, is_under, relative_to_root};

/// Filename suffixes marking demonstration (story) files.
pub const DEMO_SUFFIXES: &[&str] = &[".stories.tsx", ".stories.ts", ".stories.jsx", ".stories.js"];

/// Top-level directories excluded from consumer checks, relative to the
/// project root. Deny wins over allow.
pub const EXCLUDED_DIRS: &[&str] = &[
    "packages/foundation",
    "packages/foundation-icons",
    "scripts",
    "tools",
    "docs",
    "node_modules",
    "vendor",
    "dist",
    "build",
    ".next",
    "storybook-static",
    "templates",
    "coverage",
];

/// Roots under which consumer application code lives.
pub const CONSUMER_ROOTS: &[&str] = &["apps", "src"];

/// Default library-source roots, used when no override is configured.
pub const DEFAULT_LIBRARY_ROOTS: &[&str] = &["packages/foundation", "packages/foundation-icons"];

/// Scope classification of a file for consumer-facing detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerScope {
    /// Application-level source; detectors run.
    Consumer,
    /// A demonstration (story) file; detectors skip.
    Demonstration,
    /// Excluded infrastructure, tooling, or generated output; detectors skip.
    Excluded,
    /// Empty, sentinel, or outside-root path; detectors skip.
    Unresolvable,
}

/// Classifies a path for consumer-scoped detectors.
///
/// The path and project root may use either separator; both are normalized.
/// A path equal to the project root itself is out of scope.
#[must_use]
pub fn consumer_scope(path: &str, project_root: &str) -> ConsumerScope {
    if path.is_empty() || path.starts_with('<') {
        return ConsumerScope::Unresolvable;
    }

    let Some(rel) = relative_to_root(path, project_root) else {
        return ConsumerScope::Unresolvable;
    };

    if is_demo_file(&rel) {
        return ConsumerScope::Demonstration;
    }

    if EXCLUDED_DIRS.iter().any(|dir| is_under(&rel, dir)) {
        return ConsumerScope::Excluded;
    }

    if !rel.is_empty() && CONSUMER_ROOTS.iter().any(|root| is_under(&rel, root)) {
        return ConsumerScope::Consumer;
    }

    // Not allow-listed: fail closed.
    ConsumerScope::Excluded
}

/// Whether the path falls under a library-source root.
///
/// `overrides` replaces the default root pair when non-empty. Paths outside
/// the project root are never library source.
#[must_use]
pub fn is_library_source(path: &str, project_root: &str, overrides: &[String]) -> bool {
    let Some(rel) = relative_to_root(path, project_root) else {
        return false;
    };

    if overrides.is_empty() {
        DEFAULT_LIBRARY_ROOTS.iter().any(|root| is_under(&rel, root))
    } else {
        overrides.iter().any(|root| is_under(&rel, root))
    }
}

/// Whether the filename carries a recognized demonstration suffix.
#[must_use]
pub fn is_demo_file(path: &str) -> bool {
    let name = file_name(path);
    DEMO_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "/repo";

    #[test]
    fn consumer_under_apps() {
        assert_eq!(
            consumer_scope("/repo/apps/web/page.tsx", ROOT),
            ConsumerScope::Consumer
        );
        assert_eq!(
            consumer_scope("/repo/src/features/cart.tsx", ROOT),
            ConsumerScope::Consumer
        );
    }

    #[test]
    fn library_package_is_excluded() {
        assert_eq!(
            consumer_scope("/repo/packages/foundation/src/Button.tsx", ROOT),
            ConsumerScope::Excluded
        );
    }

    #[test]
    fn tooling_and_generated_output_are_excluded() {
        for path in [
            "/repo/scripts/codemod.ts",
            "/repo/node_modules/lib/index.js",
            "/repo/dist/main.js",
            "/repo/storybook-static/iframe.html",
        ] {
            assert_eq!(consumer_scope(path, ROOT), ConsumerScope::Excluded, "{path}");
        }
    }

    #[test]
    fn stories_classify_as_demonstration() {
        assert_eq!(
            consumer_scope("/repo/apps/web/Button.stories.tsx", ROOT),
            ConsumerScope::Demonstration
        );
        assert_eq!(
            consumer_scope("/repo/src/Card.stories.ts", ROOT),
            ConsumerScope::Demonstration
        );
    }

    #[test]
    fn demo_suffix_must_terminate_filename() {
        // A directory named like a story does not make its contents demos.
        assert_eq!(
            consumer_scope("/repo/apps/web/Button.stories.tsx.snap", ROOT),
            ConsumerScope::Consumer
        );
    }

    #[test]
    fn sentinel_and_empty_paths_are_unresolvable() {
        assert_eq!(consumer_scope("", ROOT), ConsumerScope::Unresolvable);
        assert_eq!(consumer_scope("<input>", ROOT), ConsumerScope::Unresolvable);
        assert_eq!(consumer_scope("<text>", ROOT), ConsumerScope::Unresolvable);
    }

    #[test]
    fn outside_root_is_unresolvable() {
        assert_eq!(
            consumer_scope("/elsewhere/src/page.tsx", ROOT),
            ConsumerScope::Unresolvable
        );
    }

    #[test]
    fn project_root_itself_is_out_of_scope() {
        assert_eq!(consumer_scope("/repo", ROOT), ConsumerScope::Excluded);
    }

    #[test]
    fn unlisted_top_level_fails_closed() {
        assert_eq!(
            consumer_scope("/repo/config/site.ts", ROOT),
            ConsumerScope::Excluded
        );
    }

    #[test]
    fn backslash_separators_normalize() {
        assert_eq!(
            consumer_scope(r"C:\repo\apps\web\page.tsx", r"C:\repo"),
            ConsumerScope::Consumer
        );
    }

    #[test]
    fn library_source_defaults() {
        assert!(is_library_source(
            "/repo/packages/foundation/src/Button.tsx",
            ROOT,
            &[]
        ));
        assert!(!is_library_source("/repo/apps/web/page.tsx", ROOT, &[]));
    }

    #[test]
    fn library_source_override_replaces_defaults() {
        let overrides = vec!["src/foundation".to_string()];
        assert!(is_library_source(
            "/repo/src/foundation/Button.tsx",
            ROOT,
            &overrides
        ));
        // Default roots no longer apply once overridden.
        assert!(!is_library_source(
            "/repo/packages/foundation/src/Button.tsx",
            ROOT,
            &overrides
        ));
    }

    #[test]
    fn library_source_outside_root_is_false() {
        assert!(!is_library_source("/elsewhere/foundation.tsx", ROOT, &[]));
    }

    #[test]
    fn deny_wins_over_allow() {
        // src/ is allow-listed, but a vendored tree inside it stays denied
        // only when it sits at the top level; nested vendor dirs are the
        // consumer's own code.
        assert_eq!(
            consumer_scope("/repo/vendor/src/page.tsx", ROOT),
            ConsumerScope::Excluded
        );
    }
}
