//! Per-file lint engine.
//!
//! The host parses one file, then hands the path and tree to
//! [`Engine::check_module`]. The engine holds only immutable state — the
//! config and the rule set — so the same instance can check any number of
//! files; all per-file state (import bindings) is created and dropped
//! inside each rule's `check`. The engine performs no I/O and keeps
//! nothing between calls: identical input always yields identical output.

use std::path::Path;

use foundation_lint_core::ast::SourceModule;
use foundation_lint_core::{EngineConfig, FileContext, LintResult, RuleBox};
use foundation_lint_rules::Preset;
use tracing::debug;

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    config: Option<EngineConfig>,
    rules: Vec<RuleBox>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine configuration.
    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Adds a rule to the engine.
    #[must_use]
    pub fn rule<R: foundation_lint_core::Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the engine.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds every rule of a preset.
    #[must_use]
    pub fn preset(mut self, preset: Preset) -> Self {
        self.rules.extend(preset.rules());
        self
    }

    /// Builds the engine. An empty rule set falls back to the
    /// recommended preset.
    #[must_use]
    pub fn build(self) -> Engine {
        let rules = if self.rules.is_empty() {
            Preset::Recommended.rules()
        } else {
            self.rules
        };
        Engine {
            config: self.config.unwrap_or_default(),
            rules,
        }
    }
}

/// Runs a fixed rule set over parsed modules, one file at a time.
pub struct Engine {
    config: EngineConfig,
    rules: Vec<RuleBox>,
}

impl Engine {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The rules this engine runs, in execution order.
    #[must_use]
    pub fn rules(&self) -> &[RuleBox] {
        &self.rules
    }

    /// Checks one parsed module.
    ///
    /// Diagnostics are ordered by rule, then by each rule's traversal
    /// order within the file.
    #[must_use]
    pub fn check_module(&self, path: &Path, module: &SourceModule) -> LintResult {
        debug!(path = %path.display(), "checking module");

        let ctx = FileContext::new(path, &self.config.project_root)
            .with_library_roots(self.config.library_roots.iter().cloned());

        let mut result = LintResult::new();
        result.files_checked = 1;
        for rule in &self.rules {
            let diagnostics = rule.check(&ctx, module);
            if !diagnostics.is_empty() {
                debug!(rule = rule.name(), count = diagnostics.len(), "rule findings");
            }
            result.diagnostics.extend(diagnostics);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundation_lint_core::ast::{
        Expr, ImportDecl, ImportSpecifier, JsxAttr, JsxElement, ModuleItem, Span,
    };
    use foundation_lint_rules::NoClassNameProp;

    fn sample_module() -> SourceModule {
        SourceModule::new()
            .with_item(ModuleItem::Import(
                ImportDecl::new("@canvas/foundation", Span::new(1, 0))
                    .with_specifier(ImportSpecifier::named("Button")),
            ))
            .with_item(ModuleItem::Expr(Expr::Jsx(
                JsxElement::ident("Button", Span::new(3, 2)).with_attr(JsxAttr::string(
                    "className",
                    "m-2",
                    Span::new(3, 10),
                )),
            )))
    }

    #[test]
    fn empty_builder_uses_recommended_preset() {
        let engine = Engine::builder().build();
        assert!(!engine.rules().is_empty());
    }

    #[test]
    fn check_module_counts_the_file() {
        let engine = Engine::builder()
            .config(EngineConfig::new("/repo"))
            .rule(NoClassNameProp::new())
            .build();
        let result = engine.check_module(
            Path::new("/repo/apps/web/page.tsx"),
            &sample_module(),
        );
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.diagnostics.len(), 1);
    }

    #[test]
    fn library_root_override_flows_into_context() {
        let engine = Engine::builder()
            .config(EngineConfig::new("/repo").with_library_roots(["src/foundation"]))
            .rule(NoClassNameProp::new())
            .build();
        let result = engine.check_module(
            Path::new("/repo/src/foundation/compose.tsx"),
            &sample_module(),
        );
        assert!(result.diagnostics.is_empty());
    }
}
