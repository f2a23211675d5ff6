//! Per-file import-alias resolution.
//!
//! [`ImportResolver`] tracks which local identifiers denote which canonical
//! components, regardless of import style: named, renamed, namespaced,
//! default, deep-path, or via the legacy package alias. One resolver value
//! is created per analyzed file and dropped afterwards; nothing is pooled or
//! shared across files.
//!
//! The two-phase contract: observe every import declaration before asking
//! any query, since declaration order relative to usage is not guaranteed.
//! [`ImportResolver::collect`] performs the full first phase in one call.

use std::collections::HashMap;

use crate::ast::{ImportDecl, ImportSpecifier, JsxName, SourceModule};
use crate::registry;

/// How a local name was bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// `import { X }` or `import { X as Y }`.
    Named,
    /// `import * as NS`.
    Namespace,
    /// `import X` (default).
    Default,
}

/// One tracked binding: a local name resolved to a canonical component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// The canonical component name. For namespace bindings this is the
    /// alias itself; membership is only established at member access.
    pub canonical: String,
    /// How the binding was introduced.
    pub kind: BindingKind,
}

/// Which named imports the resolver tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filter {
    /// Only names in the Foundation registry.
    Foundation,
    /// Every name imported from a canonical entry point.
    AnyComponent,
}

/// Per-file, stateful collector of import bindings.
#[derive(Debug)]
pub struct ImportResolver {
    filter: Filter,
    bindings: HashMap<String, ImportBinding>,
}

impl ImportResolver {
    /// A resolver that tracks only Foundation components.
    #[must_use]
    pub fn foundation() -> Self {
        Self {
            filter: Filter::Foundation,
            bindings: HashMap::new(),
        }
    }

    /// A resolver that tracks every component imported from a canonical
    /// entry point, Foundation or not.
    #[must_use]
    pub fn any_component() -> Self {
        Self {
            filter: Filter::AnyComponent,
            bindings: HashMap::new(),
        }
    }

    /// Runs the full import-collection phase over a module.
    #[must_use]
    pub fn collect(mut self, module: &SourceModule) -> Self {
        for decl in module.imports() {
            self.observe_import(decl);
        }
        self
    }

    /// Observes one import declaration.
    ///
    /// Declarations whose source does not match the canonical-entry-point
    /// predicate are ignored entirely. Re-declaring a local name overwrites
    /// the earlier binding: last write wins.
    pub fn observe_import(&mut self, decl: &ImportDecl) {
        if !registry::is_canonical_entry(&decl.source.value) {
            return;
        }

        for spec in &decl.specifiers {
            match spec {
                ImportSpecifier::Named { imported, local } => {
                    let tracked = match self.filter {
                        Filter::Foundation => registry::is_foundation_component(imported),
                        Filter::AnyComponent => true,
                    };
                    if tracked {
                        self.bindings.insert(
                            local.clone(),
                            ImportBinding {
                                canonical: imported.clone(),
                                kind: BindingKind::Named,
                            },
                        );
                    }
                }
                ImportSpecifier::Namespace { local } => {
                    self.bindings.insert(
                        local.clone(),
                        ImportBinding {
                            canonical: local.clone(),
                            kind: BindingKind::Namespace,
                        },
                    );
                }
                ImportSpecifier::Default { local } => {
                    // Covers deep default-import-by-path:
                    // `import Button from "@canvas/foundation/Button"`.
                    if registry::is_foundation_component(local) {
                        self.bindings.insert(
                            local.clone(),
                            ImportBinding {
                                canonical: local.clone(),
                                kind: BindingKind::Default,
                            },
                        );
                    }
                }
            }
        }
    }

    /// Whether a local name has any binding, namespace aliases included.
    #[must_use]
    pub fn is_bound(&self, local: &str) -> bool {
        self.bindings.contains_key(local)
    }

    /// The canonical component a local name resolves to.
    ///
    /// Namespace aliases resolve to `None` here; their members resolve
    /// through [`Self::resolve_element`].
    #[must_use]
    pub fn resolve(&self, local: &str) -> Option<&str> {
        self.bindings
            .get(local)
            .filter(|b| b.kind != BindingKind::Namespace)
            .map(|b| b.canonical.as_str())
    }

    /// Whether a local name is a tracked namespace alias.
    #[must_use]
    pub fn is_namespace(&self, local: &str) -> bool {
        self.bindings
            .get(local)
            .is_some_and(|b| b.kind == BindingKind::Namespace)
    }

    /// Resolves a JSX opening-element name to a canonical component.
    ///
    /// Direct identifiers resolve through their binding; `Alias.Member`
    /// resolves when `Alias` is a tracked namespace and the member passes
    /// the resolver's filter.
    #[must_use]
    pub fn resolve_element<'a>(&'a self, name: &'a JsxName) -> Option<&'a str> {
        match name {
            JsxName::Ident(ident) => self.resolve(ident),
            JsxName::Member { object, property } => {
                if !self.is_namespace(object) {
                    return None;
                }
                let member_ok = match self.filter {
                    Filter::Foundation => registry::is_foundation_component(property),
                    Filter::AnyComponent => {
                        property.chars().next().is_some_and(char::is_uppercase)
                    }
                };
                member_ok.then_some(property.as_str())
            }
        }
    }

    /// Canonical names bound directly (named or default; namespaces are
    /// aliases, not component bindings).
    pub fn bound_components(&self) -> impl Iterator<Item = &str> {
        self.bindings
            .values()
            .filter(|b| b.kind != BindingKind::Namespace)
            .map(|b| b.canonical.as_str())
    }

    /// Whether any import bound the given canonical component name.
    #[must_use]
    pub fn is_component_bound(&self, canonical: &str) -> bool {
        self.bound_components().any(|name| name == canonical)
    }
}
