//! Rule to forbid `className` on Foundation components.
//!
//! # Rationale
//!
//! Foundation components own their styling. A `className` injected by a
//! consumer couples application code to the component's internal markup and
//! breaks when the component evolves. Variants and size props are the
//! supported customization surface.

use foundation_lint_core::{Diagnostic, FileContext, Location, Rule, Severity};
use foundation_lint_core::ast::SourceModule;

use crate::support::scan_forbidden_attrs;

/// Rule code for no-class-name-prop.
pub const CODE: &str = "FC001";

/// Rule name for no-class-name-prop.
pub const NAME: &str = "no-class-name-prop";

/// Message id emitted for a `className` on a Foundation component.
pub const MESSAGE_ID: &str = "noClassName";

/// Forbids the `className` attribute on Foundation components.
#[derive(Debug, Clone)]
pub struct NoClassNameProp {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoClassNameProp {
    fn default() -> Self {
        Self::new()
    }
}

impl NoClassNameProp {
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

impl Rule for NoClassNameProp {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids className on Foundation components"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, module: &SourceModule) -> Vec<Diagnostic> {
        scan_forbidden_attrs(ctx, module, &["className"])
            .into_iter()
            .map(|hit| {
                Diagnostic::new(
                    CODE,
                    NAME,
                    self.severity,
                    Location::from_span(ctx.relative_path.clone(), hit.attr.span),
                    MESSAGE_ID,
                )
                .with_data("component", hit.component)
            })
            .collect()
    }
}
