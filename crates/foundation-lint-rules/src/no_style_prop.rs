//! Rule to forbid inline `style` on Foundation components.
//!
//! Same contract as `no-class-name-prop`, for the other ad hoc styling
//! channel. An element carrying both `className` and `style` is reported by
//! both rules, one diagnostic per attribute.

use foundation_lint_core::{Diagnostic, FileContext, Location, Rule, Severity};
use foundation_lint_core::ast::SourceModule;

use crate::support::scan_forbidden_attrs;

/// Rule code for no-style-prop.
pub const CODE: &str = "FC002";

/// Rule name for no-style-prop.
pub const NAME: &str = "no-style-prop";

/// Message id emitted for a `style` on a Foundation component.
pub const MESSAGE_ID: &str = "noStyleProp";

/// Forbids the `style` attribute on Foundation components.
#[derive(Debug, Clone)]
pub struct NoStyleProp {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoStyleProp {
    fn default() -> Self {
        Self::new()
    }
}

impl NoStyleProp {
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

impl Rule for NoStyleProp {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids inline style on Foundation components"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, module: &SourceModule) -> Vec<Diagnostic> {
        scan_forbidden_attrs(ctx, module, &["style"])
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
