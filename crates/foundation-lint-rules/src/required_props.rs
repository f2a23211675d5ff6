//! Rule to require contract props on specific Foundation components.
//!
//! # Rationale
//!
//! A handful of components are unusable or inaccessible without one
//! specific prop: an icon without a label, an icon button without an
//! accessible name, an avatar without the name it falls back to. The
//! contract table is fixed; a prop that is present but trims to an empty
//! string is as much a violation as an absent one.

use foundation_lint_core::ast::{AttrValue, ContainerExpr, SourceModule};
use foundation_lint_core::utils::jsx::{find_attr, for_each_element};
use foundation_lint_core::{Diagnostic, FileContext, ImportResolver, Location, Rule, Severity};

/// Rule code for required-contract-props.
pub const CODE: &str = "FC012";

/// Rule name for required-contract-props.
pub const NAME: &str = "required-contract-props";

/// Message id for an absent required prop.
pub const MISSING_MESSAGE_ID: &str = "missingRequiredProp";

/// Message id for a required prop that trims to empty.
pub const EMPTY_MESSAGE_ID: &str = "emptyRequiredProp";

/// Component → required prop contract table.
const REQUIRED_PROPS: &[(&str, &str)] = &[
    ("Avatar", "name"),
    ("Icon", "label"),
    ("IconButton", "aria-label"),
];

/// Requires the contract props of specific Foundation components.
#[derive(Debug, Clone)]
pub struct RequiredContractProps {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for RequiredContractProps {
    fn default() -> Self {
        Self::new()
    }
}

impl RequiredContractProps {
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

/// Whether a present value satisfies the contract.
///
/// Bare attributes and non-literal expressions pass; a string literal or a
/// purely literal template that trims to empty does not.
fn value_satisfies(value: Option<&AttrValue>) -> bool {
    match value {
        None => true,
        Some(AttrValue::Str(lit)) => !lit.value.trim().is_empty(),
        Some(AttrValue::Container(ContainerExpr::Str(lit))) => !lit.value.trim().is_empty(),
        Some(AttrValue::Container(ContainerExpr::Template(template))) => {
            template.interpolations > 0
                || template.quasis.iter().any(|quasi| !quasi.trim().is_empty())
        }
        Some(AttrValue::Container(_)) => true,
    }
}

impl Rule for RequiredContractProps {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the contract props of specific Foundation components"
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
            for (_, prop) in REQUIRED_PROPS.iter().filter(|(c, _)| *c == component) {
                let message_id = match find_attr(element, prop) {
                    None => MISSING_MESSAGE_ID,
                    Some(attr) => {
                        if value_satisfies(attr.value.as_ref()) {
                            continue;
                        }
                        EMPTY_MESSAGE_ID
                    }
                };
                diagnostics.push(
                    Diagnostic::new(
                        CODE,
                        NAME,
                        self.severity,
                        Location::from_span(ctx.relative_path.clone(), element.span),
                        message_id,
                    )
                    .with_data("component", component.to_string())
                    .with_data("prop", (*prop).to_string()),
                );
            }
        });
        diagnostics
    }
}
