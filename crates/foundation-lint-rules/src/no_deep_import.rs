//! Rule to forbid deep imports into the Foundation packages.
//!
//! # Rationale
//!
//! The public entry point is the supported API surface. Deep sub-paths
//! reach into internal module layout, which is free to change between
//! releases. One diagnostic per offending declaration, regardless of what
//! it imports.

use foundation_lint_core::ast::SourceModule;
use foundation_lint_core::{registry, Diagnostic, FileContext, Location, Rule, Severity};

/// Rule code for no-deep-import.
pub const CODE: &str = "FC003";

/// Rule name for no-deep-import.
pub const NAME: &str = "no-deep-import";

/// Message id emitted for a deep import.
pub const MESSAGE_ID: &str = "noDeepImport";

/// Forbids importing from sub-paths of the canonical packages.
#[derive(Debug, Clone)]
pub struct NoDeepImport {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoDeepImport {
    fn default() -> Self {
        Self::new()
    }
}

impl NoDeepImport {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoDeepImport {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids deep imports into the Foundation packages"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, module: &SourceModule) -> Vec<Diagnostic> {
        use foundation_lint_core::ConsumerScope;
        if ctx.consumer_scope() != ConsumerScope::Consumer {
            return Vec::new();
        }

        module
            .imports()
            .filter_map(|decl| {
                registry::deep_import_suffix(&decl.source.value).map(|_suffix| {
                    Diagnostic::new(
                        CODE,
                        NAME,
                        self.severity,
                        Location::from_span(ctx.relative_path.clone(), decl.source.span),
                        MESSAGE_ID,
                    )
                    .with_data("source", decl.source.value.clone())
                })
            })
            .collect()
    }
}
