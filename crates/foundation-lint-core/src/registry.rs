//! The fixed Foundation component tables.
//!
//! Process-wide immutable constants: the closed set of Foundation component
//! names, the HTML-element → sanctioned-alternative table, and the
//! canonical-entry-point predicate. Loaded once, shared read-only, never a
//! mutable singleton.

/// The public package through which Foundation components are imported.
pub const PUBLIC_PACKAGE: &str = "@canvas/foundation";

/// The legacy package alias, still accepted as a canonical entry point.
pub const LEGACY_PACKAGE: &str = "@canvas/ui";

/// The closed set of Foundation component names, sorted.
pub const FOUNDATION_COMPONENTS: &[&str] = &[
    "Avatar",
    "Badge",
    "Button",
    "Card",
    "Checkbox",
    "Divider",
    "Heading",
    "Icon",
    "IconButton",
    "Input",
    "Label",
    "Link",
    "Modal",
    "Radio",
    "Select",
    "Spinner",
    "Switch",
    "Tabs",
    "Tag",
    "Text",
    "Textarea",
    "Tooltip",
];

/// HTML element → sanctioned Foundation alternatives.
const HTML_ALTERNATIVES: &[(&str, &[&str])] = &[
    ("a", &["Link"]),
    ("button", &["Button", "IconButton"]),
    ("h1", &["Heading"]),
    ("h2", &["Heading"]),
    ("h3", &["Heading"]),
    ("h4", &["Heading"]),
    ("h5", &["Heading"]),
    ("h6", &["Heading"]),
    ("hr", &["Divider"]),
    ("input", &["Input"]),
    ("label", &["Label"]),
    ("p", &["Text"]),
    ("select", &["Select"]),
    ("span", &["Text"]),
    ("textarea", &["Textarea"]),
];

/// Whether `name` is a Foundation component.
#[must_use]
pub fn is_foundation_component(name: &str) -> bool {
    FOUNDATION_COMPONENTS.binary_search(&name).is_ok()
}

/// The sanctioned alternatives for a lowercase HTML tag, if any.
#[must_use]
pub fn html_alternatives(tag: &str) -> Option<&'static [&'static str]> {
    HTML_ALTERNATIVES
        .iter()
        .find(|(candidate, _)| *candidate == tag)
        .map(|(_, alternatives)| *alternatives)
}

/// Whether a module source denotes the canonical entry point.
///
/// True for the public package name, the legacy alias, and any path that
/// starts with either followed by `/`. Deep sub-paths satisfy this predicate
/// too — whether they are *permitted* is a separate question answered by
/// [`deep_import_suffix`].
#[must_use]
pub fn is_canonical_entry(source: &str) -> bool {
    source == PUBLIC_PACKAGE
        || source == LEGACY_PACKAGE
        || source.starts_with(&format!("{PUBLIC_PACKAGE}/"))
        || source.starts_with(&format!("{LEGACY_PACKAGE}/"))
}

/// The nonempty sub-path of a deep import into the canonical packages.
///
/// `"@canvas/foundation"` → `None`; `"@canvas/foundation/Button"` →
/// `Some("Button")`. The inverse of the bare-entry case of
/// [`is_canonical_entry`].
#[must_use]
pub fn deep_import_suffix(source: &str) -> Option<&str> {
    for package in [PUBLIC_PACKAGE, LEGACY_PACKAGE] {
        if let Some(rest) = source.strip_prefix(package) {
            if let Some(suffix) = rest.strip_prefix('/') {
                if !suffix.is_empty() {
                    return Some(suffix);
                }
            }
        }
    }
    None
}
