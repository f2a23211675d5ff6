//! Shared walks for rule implementations.

use foundation_lint_core::ast::{JsxAttr, PlainAttr, SourceModule};
use foundation_lint_core::utils::jsx::for_each_element;
use foundation_lint_core::{FileContext, ImportResolver};

/// One forbidden-attribute hit: the offending attribute plus the canonical
/// name of the component it sits on.
pub(crate) struct AttrHit<'a> {
    pub attr: &'a PlainAttr,
    pub component: String,
}

/// The attribute-forbidding walk shared by the styling-prop rules.
///
/// Phase one collects Foundation import bindings; phase two resolves each
/// opening element (direct identifier or namespace member) and records every
/// forbidden attribute present — two forbidden attributes on one element
/// mean two hits.
pub(crate) fn scan_forbidden_attrs<'a>(
    ctx: &FileContext,
    module: &'a SourceModule,
    forbidden: &[&str],
) -> Vec<AttrHit<'a>> {
    if !ctx.is_consumer() {
        tracing::trace!(path = %ctx.relative_path.display(), "out of scope, skipping");
        return Vec::new();
    }

    let resolver = ImportResolver::foundation().collect(module);

    let mut hits = Vec::new();
    for_each_element(module, &mut |element| {
        let Some(component) = resolver.resolve_element(&element.name) else {
            return;
        };
        for attr in &element.attrs {
            if let JsxAttr::Plain(plain) = attr {
                if forbidden.contains(&plain.name.as_str()) {
                    hits.push(AttrHit {
                        attr: plain,
                        component: component.to_string(),
                    });
                }
            }
        }
    });
    hits
}
