//! Shared JSX traversal helpers for rule implementations.

use crate::ast::{
    AttrValue, ContainerExpr, Expr, JsxAttr, JsxChild, JsxElement, PlainAttr, SourceModule,
    TemplateLit,
};
use crate::imports::ImportResolver;

/// Attribute names treated as class-bearing.
pub const CLASS_ATTRS: &[&str] = &["className", "class"];

/// Visits every JSX element in the module, depth-first in source order.
///
/// Elements are reached through module-level expressions, element children,
/// and expression-container children that resolve to JSX. Attribute
/// containers never hold elements in this tree model.
pub fn for_each_element<'a, F>(module: &'a SourceModule, f: &mut F)
where
    F: FnMut(&'a JsxElement),
{
    for item in &module.items {
        if let crate::ast::ModuleItem::Expr(expr) = item {
            visit_expr(expr, f);
        }
    }
}

fn visit_expr<'a, F>(expr: &'a Expr, f: &mut F)
where
    F: FnMut(&'a JsxElement),
{
    if let Expr::Jsx(element) = expr {
        visit_element(element, f);
    }
}

fn visit_element<'a, F>(element: &'a JsxElement, f: &mut F)
where
    F: FnMut(&'a JsxElement),
{
    f(element);
    for child in &element.children {
        match child {
            JsxChild::Element(nested) => visit_element(nested, f),
            JsxChild::Container(expr) => visit_expr(expr, f),
            JsxChild::Text(_) => {}
        }
    }
}

/// Finds a plain attribute by name.
#[must_use]
pub fn find_attr<'a>(element: &'a JsxElement, name: &str) -> Option<&'a PlainAttr> {
    element.attrs.iter().find_map(|attr| match attr {
        JsxAttr::Plain(plain) if plain.name == name => Some(plain),
        _ => None,
    })
}

/// Whether the attribute name is class-bearing.
#[must_use]
pub fn is_class_attr(name: &str) -> bool {
    CLASS_ATTRS.contains(&name)
}

/// Extracts literal class text from an attribute value.
///
/// String literals yield their value; template literals yield their literal
/// quasis joined with a single space, interpolations ignored. Everything
/// else yields `None`.
#[must_use]
pub fn class_text(value: &AttrValue) -> Option<String> {
    match value {
        AttrValue::Str(lit) => Some(lit.value.clone()),
        AttrValue::Container(ContainerExpr::Str(lit)) => Some(lit.value.clone()),
        AttrValue::Container(ContainerExpr::Template(template)) => {
            Some(template_text(template))
        }
        AttrValue::Container(_) => None,
    }
}

/// The literal text of a template, quasis joined with a single space.
#[must_use]
pub fn template_text(template: &TemplateLit) -> String {
    template.quasis.join(" ")
}

/// Whether any descendant of `element` resolves to a tracked component.
///
/// Searches nested elements and expression-container children that resolve
/// to JSX. Each branch stops descending at its first match; sibling
/// branches are tried until one matches.
#[must_use]
pub fn has_component_descendant(element: &JsxElement, resolver: &ImportResolver) -> bool {
    element.children.iter().any(|child| match child {
        JsxChild::Element(nested) => element_is_or_contains(nested, resolver),
        JsxChild::Container(Expr::Jsx(nested)) => element_is_or_contains(nested, resolver),
        _ => false,
    })
}

fn element_is_or_contains(element: &JsxElement, resolver: &ImportResolver) -> bool {
    resolver.resolve_element(&element.name).is_some()
        || has_component_descendant(element, resolver)
}
