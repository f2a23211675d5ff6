//! Rule to prefer Foundation components over raw HTML elements.
//!
//! # Rationale
//!
//! Rebuilding a sanctioned component with raw markup forks its behavior and
//! accessibility handling. The rule only fires when an alternative is
//! actually imported in the file — a plain `<p>` in a file that never
//! touches the design system is not this rule's business.

use foundation_lint_core::ast::{JsxName, SourceModule};
use foundation_lint_core::utils::jsx::for_each_element;
use foundation_lint_core::{registry, Diagnostic, FileContext, ImportResolver, Location, Rule, Severity};

/// Rule code for prefer-foundation-component.
pub const CODE: &str = "FC005";

/// Rule name for prefer-foundation-component.
pub const NAME: &str = "prefer-foundation-component";

/// Message id emitted for a replaceable raw element.
pub const MESSAGE_ID: &str = "preferComponent";

/// Reports raw HTML elements that duplicate an imported Foundation
/// component.
#[derive(Debug, Clone)]
pub struct PreferFoundationComponent {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for PreferFoundationComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferFoundationComponent {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for PreferFoundationComponent {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Prefers imported Foundation components over raw HTML elements"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, module: &SourceModule) -> Vec<Diagnostic> {
        if !ctx.is_consumer() {
            return Vec::new();
        }

        let resolver = ImportResolver::foundation().collect(module);

        let mut diagnostics = Vec::new();
        for_each_element(module, &mut |element| {
            let JsxName::Ident(tag) = &element.name else {
                return;
            };
            // Only lowercase names are HTML elements.
            if !tag.chars().next().is_some_and(char::is_lowercase) {
                return;
            }
            let Some(alternatives) = registry::html_alternatives(tag) else {
                return;
            };
            let bound: Vec<&str> = alternatives
                .iter()
                .copied()
                .filter(|alt| resolver.is_component_bound(alt))
                .collect();
            if bound.is_empty() {
                return;
            }
            diagnostics.push(
                Diagnostic::new(
                    CODE,
                    NAME,
                    self.severity,
                    Location::from_span(ctx.relative_path.clone(), element.span),
                    MESSAGE_ID,
                )
                .with_data("tag", tag.clone())
                .with_data("alternatives", bound.join(", ")),
            );
        });
        diagnostics
    }
}
