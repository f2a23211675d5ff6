//! Rule to forbid untyped prop spreads into Foundation components.
//!
//! # Rationale
//!
//! `<Button {...props}>` forwards an unknown bag of attributes, silently
//! smuggling in `className`, `style`, or props the component never
//! declared. An inline object literal is visible at the call site and is
//! always allowed; so is an identifier following the `<Component>Props`
//! convention, which signals a typed prop object.

use foundation_lint_core::ast::{JsxAttr, SourceModule, SpreadArg};
use foundation_lint_core::utils::jsx::for_each_element;
use foundation_lint_core::{Diagnostic, FileContext, ImportResolver, Location, Rule, Severity};

/// Rule code for no-untyped-prop-spread.
pub const CODE: &str = "FC004";

/// Rule name for no-untyped-prop-spread.
pub const NAME: &str = "no-untyped-prop-spread";

/// Message id emitted for an untyped spread.
pub const MESSAGE_ID: &str = "noUntypedSpread";

/// Forbids spreading untyped values into Foundation components.
#[derive(Debug, Clone)]
pub struct NoUntypedPropSpread {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoUntypedPropSpread {
    fn default() -> Self {
        Self::new()
    }
}

impl NoUntypedPropSpread {
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

/// Whether `ident` follows the `<component>Props` convention for any of the
/// given component names, case-insensitively.
fn is_props_identifier<'a>(ident: &str, components: impl Iterator<Item = &'a str>) -> bool {
    let lowered = ident.to_ascii_lowercase();
    let Some(base) = lowered.strip_suffix("props") else {
        return false;
    };
    components.into_iter().any(|name| base == name.to_ascii_lowercase())
}

impl Rule for NoUntypedPropSpread {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids spreading untyped values into Foundation components"
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
            let Some(component) = resolver.resolve_element(&element.name) else {
                return;
            };
            for attr in &element.attrs {
                let JsxAttr::Spread(spread) = attr else {
                    continue;
                };
                let allowed = match &spread.arg {
                    // Inline object: the props are spelled out right here.
                    SpreadArg::Object(_) => true,
                    SpreadArg::Ident(ident) => is_props_identifier(
                        &ident.name,
                        resolver.bound_components().chain(std::iter::once(component)),
                    ),
                    SpreadArg::Other(_) => false,
                };
                if !allowed {
                    diagnostics.push(
                        Diagnostic::new(
                            CODE,
                            NAME,
                            self.severity,
                            Location::from_span(ctx.relative_path.clone(), spread.span),
                            MESSAGE_ID,
                        )
                        .with_data("component", component.to_string()),
                    );
                }
            }
        });
        diagnostics
    }
}
