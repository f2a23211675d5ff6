//! The closed syntax-tree model consumed by rules.
//!
//! The host parses source once and hands each rule a [`SourceModule`]. The
//! model is a deliberately closed set of tagged unions covering exactly the
//! shapes the detectors consume: import declarations with typed specifiers,
//! JSX opening elements named by an identifier or a two-part member
//! expression, plain or spread attributes, and ordered children. Anything a
//! real parser produces beyond these shapes maps to an `Other` variant and
//! is skipped, never fatal.

use serde::{Deserialize, Serialize};

/// Position of a node in its source file.
///
/// Lines are 1-indexed; columns are 0-indexed byte offsets within the line,
/// matching what tree producers emit. [`crate::Location`] adds 1 to the
/// column for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column (0-indexed byte offset within line).
    pub column: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A parsed source module: the per-file input to every rule.
#[derive(Debug, Clone, Default)]
pub struct SourceModule {
    /// Top-level items in source order.
    pub items: Vec<ModuleItem>,
}

impl SourceModule {
    /// Creates an empty module.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item, for fixture-style construction.
    #[must_use]
    pub fn with_item(mut self, item: ModuleItem) -> Self {
        self.items.push(item);
        self
    }

    /// Iterates the import declarations of this module.
    pub fn imports(&self) -> impl Iterator<Item = &ImportDecl> {
        self.items.iter().filter_map(|item| match item {
            ModuleItem::Import(decl) => Some(decl),
            ModuleItem::Expr(_) => None,
        })
    }
}

/// A top-level module item.
#[derive(Debug, Clone)]
pub enum ModuleItem {
    /// An import declaration.
    Import(ImportDecl),
    /// An expression reachable from the module body (a rendered JSX tree,
    /// a standalone literal, and so on).
    Expr(Expr),
}

/// An import declaration with its typed specifiers.
#[derive(Debug, Clone)]
pub struct ImportDecl {
    /// The module source string literal.
    pub source: StrLit,
    /// Specifiers in declaration order.
    pub specifiers: Vec<ImportSpecifier>,
    /// Location of the declaration.
    pub span: Span,
}

impl ImportDecl {
    /// Creates an import declaration from a source string.
    #[must_use]
    pub fn new(source: impl Into<String>, span: Span) -> Self {
        Self {
            source: StrLit::new(source, span),
            specifiers: Vec::new(),
            span,
        }
    }

    /// Appends a specifier.
    #[must_use]
    pub fn with_specifier(mut self, spec: ImportSpecifier) -> Self {
        self.specifiers.push(spec);
        self
    }
}

/// One import specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSpecifier {
    /// `import { Imported as Local }` (`imported == local` when not renamed).
    Named {
        /// The exported name being imported.
        imported: String,
        /// The local binding name.
        local: String,
    },
    /// `import * as Local`.
    Namespace {
        /// The local alias.
        local: String,
    },
    /// `import Local` (default import).
    Default {
        /// The local binding name.
        local: String,
    },
}

impl ImportSpecifier {
    /// A named specifier without renaming.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::Named {
            imported: name.clone(),
            local: name,
        }
    }

    /// A named specifier with a local rename.
    #[must_use]
    pub fn renamed(imported: impl Into<String>, local: impl Into<String>) -> Self {
        Self::Named {
            imported: imported.into(),
            local: local.into(),
        }
    }

    /// A namespace specifier.
    #[must_use]
    pub fn namespace(local: impl Into<String>) -> Self {
        Self::Namespace {
            local: local.into(),
        }
    }

    /// A default specifier.
    #[must_use]
    pub fn default_import(local: impl Into<String>) -> Self {
        Self::Default {
            local: local.into(),
        }
    }
}

/// A string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrLit {
    /// The literal value, unquoted.
    pub value: String,
    /// Location of the literal.
    pub span: Span,
}

impl StrLit {
    /// Creates a string literal.
    #[must_use]
    pub fn new(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }
}

/// A template literal, reduced to its literal quasis.
///
/// Interpolated expressions are opaque to the engine; only their count is
/// retained so rules can distinguish a purely literal template from one
/// with dynamic segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLit {
    /// Literal text segments, in order.
    pub quasis: Vec<String>,
    /// Number of interpolated expressions between the quasis.
    pub interpolations: usize,
    /// Location of the literal.
    pub span: Span,
}

impl TemplateLit {
    /// Creates a template literal from its quasis.
    #[must_use]
    pub fn new<I, S>(quasis: I, interpolations: usize, span: Span) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            quasis: quasis.into_iter().map(Into::into).collect(),
            interpolations,
            span,
        }
    }
}

/// An identifier reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    /// The identifier name.
    pub name: String,
    /// Location of the identifier.
    pub span: Span,
}

impl Ident {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// An inline object literal. Its properties are opaque to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectLit {
    /// Location of the literal.
    pub span: Span,
}

/// An expression, covering only the shapes rules consume.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A JSX element.
    Jsx(JsxElement),
    /// A string literal.
    Str(StrLit),
    /// A template literal.
    Template(TemplateLit),
    /// An identifier reference.
    Ident(Ident),
    /// An object literal.
    Object(ObjectLit),
    /// Any other expression shape; skipped by every rule.
    Other(Span),
}

/// A JSX element with its opening name, attributes, and ordered children.
#[derive(Debug, Clone)]
pub struct JsxElement {
    /// The opening element name.
    pub name: JsxName,
    /// Attributes in source order.
    pub attrs: Vec<JsxAttr>,
    /// Children in source order.
    pub children: Vec<JsxChild>,
    /// Location of the opening element.
    pub span: Span,
}

impl JsxElement {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub fn new(name: JsxName, span: Span) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
            span,
        }
    }

    /// Creates an element named by a simple identifier.
    #[must_use]
    pub fn ident(name: impl Into<String>, span: Span) -> Self {
        Self::new(JsxName::Ident(name.into()), span)
    }

    /// Appends an attribute.
    #[must_use]
    pub fn with_attr(mut self, attr: JsxAttr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: JsxChild) -> Self {
        self.children.push(child);
        self
    }
}

/// A JSX opening-element name: a simple identifier or a two-part member
/// expression (`Alias.Member`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsxName {
    /// `<Button>` or `<div>`.
    Ident(String),
    /// `<Ui.Button>`.
    Member {
        /// The object part (`Ui`).
        object: String,
        /// The property part (`Button`).
        property: String,
    },
}

impl JsxName {
    /// Creates a member name.
    #[must_use]
    pub fn member(object: impl Into<String>, property: impl Into<String>) -> Self {
        Self::Member {
            object: object.into(),
            property: property.into(),
        }
    }
}

/// A JSX attribute, plain or spread.
#[derive(Debug, Clone)]
pub enum JsxAttr {
    /// `name`, `name="x"`, or `name={expr}`.
    Plain(PlainAttr),
    /// `{...expr}`.
    Spread(SpreadAttr),
}

impl JsxAttr {
    /// A bare attribute with no value.
    #[must_use]
    pub fn bare(name: impl Into<String>, span: Span) -> Self {
        Self::Plain(PlainAttr {
            name: name.into(),
            value: None,
            span,
        })
    }

    /// An attribute with a string-literal value.
    #[must_use]
    pub fn string(name: impl Into<String>, value: impl Into<String>, span: Span) -> Self {
        Self::Plain(PlainAttr {
            name: name.into(),
            value: Some(AttrValue::Str(StrLit::new(value, span))),
            span,
        })
    }

    /// An attribute with an expression-container value.
    #[must_use]
    pub fn container(name: impl Into<String>, expr: ContainerExpr, span: Span) -> Self {
        Self::Plain(PlainAttr {
            name: name.into(),
            value: Some(AttrValue::Container(expr)),
            span,
        })
    }

    /// A spread attribute.
    #[must_use]
    pub fn spread(arg: SpreadArg, span: Span) -> Self {
        Self::Spread(SpreadAttr { arg, span })
    }
}

/// A plain (non-spread) attribute.
#[derive(Debug, Clone)]
pub struct PlainAttr {
    /// Attribute name.
    pub name: String,
    /// Attribute value; `None` for bare attributes.
    pub value: Option<AttrValue>,
    /// Location of the attribute.
    pub span: Span,
}

/// A spread attribute.
#[derive(Debug, Clone)]
pub struct SpreadAttr {
    /// The spread argument.
    pub arg: SpreadArg,
    /// Location of the attribute.
    pub span: Span,
}

/// The argument of a spread attribute.
#[derive(Debug, Clone)]
pub enum SpreadArg {
    /// `{...someIdent}`.
    Ident(Ident),
    /// `{...{ inline: "object" }}`.
    Object(ObjectLit),
    /// Any other spread shape (call, member chain, conditional).
    Other(Span),
}

/// An attribute value.
#[derive(Debug, Clone)]
pub enum AttrValue {
    /// A bare string literal: `name="x"`.
    Str(StrLit),
    /// An expression container: `name={expr}`.
    Container(ContainerExpr),
}

/// The expression inside an attribute's `{...}` container.
#[derive(Debug, Clone)]
pub enum ContainerExpr {
    /// `{"x"}`.
    Str(StrLit),
    /// `` {`x ${y}`} ``.
    Template(TemplateLit),
    /// `{{ color: "red" }}`.
    Object(ObjectLit),
    /// `{someIdent}`.
    Ident(Ident),
    /// Any other expression shape.
    Other(Span),
}

/// A JSX child.
#[derive(Debug, Clone)]
pub enum JsxChild {
    /// A nested element.
    Element(JsxElement),
    /// An expression container child; may itself resolve to JSX.
    Container(Expr),
    /// Literal text.
    Text(String),
}
