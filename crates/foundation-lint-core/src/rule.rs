//! Rule trait for defining contract checks.

use crate::ast::SourceModule;
use crate::context::FileContext;
use crate::types::{Diagnostic, Severity};

/// A per-file lint rule over a parsed module tree.
///
/// Implement this trait to create detectors that analyze individual source
/// modules. A rule decides for itself whether the file is in scope, builds
/// whatever per-file state it needs (import bindings, typically), walks the
/// tree, and returns diagnostics. Rules never throw: unmatched node shapes
/// are skipped, and out-of-scope files yield an empty vector.
///
/// # Example
///
/// ```ignore
/// use foundation_lint_core::{Diagnostic, FileContext, Rule};
/// use foundation_lint_core::ast::SourceModule;
///
/// pub struct NoMarquee;
///
/// impl Rule for NoMarquee {
///     fn name(&self) -> &'static str { "no-marquee" }
///     fn code(&self) -> &'static str { "FC099" }
///
///     fn check(&self, ctx: &FileContext, module: &SourceModule) -> Vec<Diagnostic> {
///         // two-phase walk: collect imports, then evaluate elements
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-deep-import").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "FC003").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single module and returns any diagnostics found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `module` - The parsed tree of the file
    fn check(&self, ctx: &FileContext, module: &SourceModule) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;
    use std::path::Path;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &FileContext, _module: &SourceModule) -> Vec<Diagnostic> {
            vec![Diagnostic::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::new(ctx.relative_path.clone(), 1, 1),
                "testFinding",
            )]
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
    }

    #[test]
    fn rule_check_emits_diagnostics() {
        let ctx = FileContext::new(Path::new("/repo/apps/a.tsx"), Path::new("/repo"));
        let diags = TestRule.check(&ctx, &SourceModule::new());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message_id, "testFinding");
    }
}
