//! Shared fixtures for integration tests.

use foundation_lint::ast::{
    Expr, ImportDecl, ImportSpecifier, JsxElement, ModuleItem, SourceModule, Span,
};
use foundation_lint::rules::Preset;
use foundation_lint::{Engine, EngineConfig};

pub const ROOT: &str = "/repo";
pub const CONSUMER_FILE: &str = "/repo/apps/web/page.tsx";
pub const LIBRARY_FILE: &str = "/repo/packages/foundation/src/compose.tsx";

pub fn sp(line: usize, column: usize) -> Span {
    Span::new(line, column)
}

/// `import { names... } from source`.
pub fn import_named(source: &str, names: &[&str]) -> ModuleItem {
    let mut decl = ImportDecl::new(source, sp(1, 0));
    for name in names {
        decl = decl.with_specifier(ImportSpecifier::named(*name));
    }
    ModuleItem::Import(decl)
}

/// `import local from source`.
pub fn import_default(source: &str, local: &str) -> ModuleItem {
    ModuleItem::Import(
        ImportDecl::new(source, sp(1, 0)).with_specifier(ImportSpecifier::default_import(local)),
    )
}

/// A rendered element as a module item.
pub fn rendered(element: JsxElement) -> ModuleItem {
    ModuleItem::Expr(Expr::Jsx(element))
}

pub fn module(items: Vec<ModuleItem>) -> SourceModule {
    let mut module = SourceModule::new();
    module.items = items;
    module
}

/// An engine over `/repo` running every rule.
pub fn strict_engine() -> Engine {
    Engine::builder()
        .config(EngineConfig::new(ROOT))
        .preset(Preset::Strict)
        .build()
}
