//! Rule to forbid the `asChild` composition escape on `Button`.
//!
//! # Rationale
//!
//! `asChild` replaces the rendered element wholesale, discarding the
//! button's own semantics and event wiring. Inside the library it is a
//! legitimate composition tool; for everyone else it is an escape hatch.
//!
//! Scoping is intentionally narrower than the shared classifier: only
//! library source and demonstration files are exempt, by a direct path
//! check. A script or tool rendering a `Button` is still held to this
//! contract.

use foundation_lint_core::ast::{JsxAttr, SourceModule};
use foundation_lint_core::scope::is_demo_file;
use foundation_lint_core::utils::jsx::for_each_element;
use foundation_lint_core::utils::paths::normalize;
use foundation_lint_core::{Diagnostic, FileContext, ImportResolver, Location, Rule, Severity};

/// Rule code for no-as-child.
pub const CODE: &str = "FC013";

/// Rule name for no-as-child.
pub const NAME: &str = "no-as-child";

/// Message id emitted for an `asChild` usage.
pub const MESSAGE_ID: &str = "noAsChild";

/// The component whose composition escape is restricted.
const RESTRICTED_COMPONENT: &str = "Button";

/// The restricted prop.
const RESTRICTED_PROP: &str = "asChild";

/// Library path fragments exempting a file from this rule.
const LIBRARY_FRAGMENTS: &[&str] = &["packages/foundation"];

/// Forbids `asChild` on `Button` outside library source and demos.
#[derive(Debug, Clone)]
pub struct NoAsChild {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoAsChild {
    fn default() -> Self {
        Self::new()
    }
}

impl NoAsChild {
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

/// The narrow scope check for this rule: not library source, not a demo.
fn in_scope(path: &str) -> bool {
    let normalized = normalize(path);
    let in_library = LIBRARY_FRAGMENTS
        .iter()
        .any(|fragment| normalized.contains(fragment));
    !in_library && !is_demo_file(&normalized)
}

impl Rule for NoAsChild {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids the asChild composition escape on Button"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, module: &SourceModule) -> Vec<Diagnostic> {
        if !in_scope(&ctx.path.to_string_lossy()) {
            return Vec::new();
        }

        let resolver = ImportResolver::foundation().collect(module);

        let mut diagnostics = Vec::new();
        for_each_element(module, &mut |element| {
            if resolver.resolve_element(&element.name) != Some(RESTRICTED_COMPONENT) {
                return;
            }
            for attr in &element.attrs {
                if let JsxAttr::Plain(plain) = attr {
                    if plain.name == RESTRICTED_PROP {
                        diagnostics.push(
                            Diagnostic::new(
                                CODE,
                                NAME,
                                self.severity,
                                Location::from_span(ctx.relative_path.clone(), plain.span),
                                MESSAGE_ID,
                            )
                            .with_data("component", RESTRICTED_COMPONENT.to_string()),
                        );
                    }
                }
            }
        });
        diagnostics
    }
}
