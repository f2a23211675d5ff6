//! Rule to forbid utility-class wrappers around Foundation components.
//!
//! # Rationale
//!
//! `<div className="p-4"><Button/></div>` positions a Foundation component
//! with ad hoc spacing utilities, bypassing the layout primitives the
//! system provides. A wrapper with project-specific classes is fine; one
//! that exists to apply generic utilities near a Foundation component is
//! reported.

use foundation_lint_core::ast::{JsxAttr, SourceModule};
use foundation_lint_core::utils::jsx::{class_text, for_each_element, has_component_descendant, is_class_attr};
use foundation_lint_core::{tokens, Diagnostic, FileContext, ImportResolver, Location, Rule, Severity};

/// Rule code for no-utility-wrapper.
pub const CODE: &str = "FC006";

/// Rule name for no-utility-wrapper.
pub const NAME: &str = "no-utility-wrapper";

/// Message id emitted for a utility-classed wrapper.
pub const MESSAGE_ID: &str = "utilityWrapper";

/// Forbids generic utility classes on wrappers of Foundation components.
#[derive(Debug, Clone)]
pub struct NoUtilityWrapper {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoUtilityWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl NoUtilityWrapper {
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

impl Rule for NoUtilityWrapper {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids generic utility classes on wrappers of Foundation components"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, module: &SourceModule) -> Vec<Diagnostic> {
        if !ctx.is_consumer() {
            return Vec::new();
        }

        // Track every component from the canonical packages, not just the
        // Foundation subset: wrapping any of them in utility spacing is the
        // same contract violation.
        let resolver = ImportResolver::any_component().collect(module);

        let mut diagnostics = Vec::new();
        for_each_element(module, &mut |element| {
            // Tracked components style themselves; only raw wrappers matter.
            if resolver.resolve_element(&element.name).is_some() {
                return;
            }
            let Some(text) = element.attrs.iter().find_map(|attr| match attr {
                JsxAttr::Plain(plain) if is_class_attr(&plain.name) => {
                    plain.value.as_ref().and_then(class_text)
                }
                _ => None,
            }) else {
                return;
            };
            let Some(token) = tokens::extract_tokens(&text).find(|t| tokens::is_generic_utility(t))
            else {
                return;
            };
            if has_component_descendant(element, &resolver) {
                diagnostics.push(
                    Diagnostic::new(
                        CODE,
                        NAME,
                        self.severity,
                        Location::from_span(ctx.relative_path.clone(), element.span),
                        MESSAGE_ID,
                    )
                    .with_data("token", token.to_string()),
                );
            }
        });
        diagnostics
    }
}
