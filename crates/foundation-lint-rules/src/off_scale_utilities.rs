//! Scale enforcement for utility-class tokens.
//!
//! One parameterized rule covering the five visual scales: font size, line
//! height, shadow, motion duration, and color. Each instance scans three
//! places for off-scale tokens:
//!
//! 1. standalone string literals,
//! 2. standalone template literals (by their literal quasis), and
//! 3. class-bearing attributes, which dispatch to the matching literal
//!    form themselves — a template that is the value of a class attribute
//!    is *not* also visited standalone, so no token is reported twice.
//!
//! All three call the shared `find_violations`, so every scale tokenizes
//! text identically. Each denied token occurrence is its own diagnostic.

use std::path::PathBuf;

use foundation_lint_core::ast::{
    AttrValue, ContainerExpr, Expr, JsxAttr, JsxChild, JsxElement, ModuleItem, PlainAttr,
    SourceModule, Span, StrLit, TemplateLit,
};
use foundation_lint_core::tokens::{find_violations, TokenScale};
use foundation_lint_core::utils::jsx::is_class_attr;
use foundation_lint_core::{Diagnostic, FileContext, Location, Rule, Severity};

/// Enforces one closed token vocabulary over class text and literals.
#[derive(Debug, Clone)]
pub struct OffScaleUtilities {
    scale: TokenScale,
    code: &'static str,
    name: &'static str,
    message_id: &'static str,
    description: &'static str,
    /// Custom severity.
    pub severity: Severity,
}

impl OffScaleUtilities {
    /// Font-size enforcement (`text-*`).
    #[must_use]
    pub fn font_size() -> Self {
        Self {
            scale: TokenScale::FontSize,
            code: "FC007",
            name: "font-size-scale",
            message_id: "offScaleFontSize",
            description: "Forbids font-size utilities outside the type ramp",
            severity: Severity::Error,
        }
    }

    /// Line-height enforcement (`leading-*`).
    #[must_use]
    pub fn line_height() -> Self {
        Self {
            scale: TokenScale::LineHeight,
            code: "FC008",
            name: "line-height-scale",
            message_id: "offScaleLineHeight",
            description: "Forbids line-height utilities outside the type ramp",
            severity: Severity::Error,
        }
    }

    /// Shadow/elevation enforcement (`shadow-*`).
    #[must_use]
    pub fn shadow() -> Self {
        Self {
            scale: TokenScale::Shadow,
            code: "FC009",
            name: "shadow-scale",
            message_id: "offScaleShadow",
            description: "Forbids shadows outside the elevation steps",
            severity: Severity::Error,
        }
    }

    /// Motion-duration enforcement (`duration-*`).
    #[must_use]
    pub fn motion_duration() -> Self {
        Self {
            scale: TokenScale::MotionDuration,
            code: "FC010",
            name: "motion-duration-scale",
            message_id: "offScaleDuration",
            description: "Forbids raw millisecond durations over motion tokens",
            severity: Severity::Error,
        }
    }

    /// Color enforcement (raw palette values under color prefixes).
    #[must_use]
    pub fn color() -> Self {
        Self {
            scale: TokenScale::Color,
            code: "FC011",
            name: "color-token-scale",
            message_id: "rawPaletteColor",
            description: "Forbids raw palette colors over semantic tokens",
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

impl Rule for OffScaleUtilities {
    fn name(&self) -> &'static str {
        self.name
    }

    fn code(&self) -> &'static str {
        self.code
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, module: &SourceModule) -> Vec<Diagnostic> {
        if !ctx.is_consumer() {
            return Vec::new();
        }

        let mut visitor = ScaleVisitor {
            rule: self,
            file: ctx.relative_path.clone(),
            diagnostics: Vec::new(),
        };
        for item in &module.items {
            if let ModuleItem::Expr(expr) = item {
                visitor.visit_expr(expr);
            }
        }
        visitor.diagnostics
    }
}

struct ScaleVisitor<'a> {
    rule: &'a OffScaleUtilities,
    file: PathBuf,
    diagnostics: Vec<Diagnostic>,
}

impl ScaleVisitor<'_> {
    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Jsx(element) => self.visit_element(element),
            Expr::Str(lit) => self.visit_string(lit),
            Expr::Template(template) => self.visit_template(template),
            _ => {}
        }
    }

    fn visit_element(&mut self, element: &JsxElement) {
        for attr in &element.attrs {
            let JsxAttr::Plain(plain) = attr else {
                continue;
            };
            if is_class_attr(&plain.name) {
                self.visit_class_attr(plain);
                continue;
            }
            match &plain.value {
                Some(AttrValue::Str(lit))
                | Some(AttrValue::Container(ContainerExpr::Str(lit))) => self.visit_string(lit),
                Some(AttrValue::Container(ContainerExpr::Template(template))) => {
                    self.visit_template(template);
                }
                _ => {}
            }
        }
        for child in &element.children {
            match child {
                JsxChild::Element(nested) => self.visit_element(nested),
                JsxChild::Container(expr) => self.visit_expr(expr),
                JsxChild::Text(_) => {}
            }
        }
    }

    /// Class-attribute entry point: dispatches to the literal form the
    /// value actually has. Template values are owned by this visitor and
    /// skipped by the standalone one.
    fn visit_class_attr(&mut self, attr: &PlainAttr) {
        match &attr.value {
            Some(AttrValue::Str(lit))
            | Some(AttrValue::Container(ContainerExpr::Str(lit))) => {
                self.report(&lit.value, attr.span);
            }
            Some(AttrValue::Container(ContainerExpr::Template(template))) => {
                for quasi in &template.quasis {
                    self.report(quasi, attr.span);
                }
            }
            _ => {}
        }
    }

    /// Standalone string-literal entry point.
    fn visit_string(&mut self, lit: &StrLit) {
        self.report(&lit.value, lit.span);
    }

    /// Standalone template-literal entry point; quasis are checked
    /// independently so tokens never merge across interpolations.
    fn visit_template(&mut self, template: &TemplateLit) {
        for quasi in &template.quasis {
            self.report(quasi, template.span);
        }
    }

    fn report(&mut self, text: &str, span: Span) {
        for token in find_violations(text, self.rule.scale) {
            self.diagnostics.push(
                Diagnostic::new(
                    self.rule.code,
                    self.rule.name,
                    self.rule.severity,
                    Location::from_span(self.file.clone(), span),
                    self.rule.message_id,
                )
                .with_data("token", token),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sp() -> Span {
        Span::new(1, 0)
    }

    fn check_consumer(rule: &OffScaleUtilities, module: &SourceModule) -> Vec<Diagnostic> {
        let ctx = FileContext::new(
            Path::new("/repo/apps/web/page.tsx"),
            Path::new("/repo"),
        );
        rule.check(&ctx, module)
    }

    fn div_with_class(value: &str) -> SourceModule {
        SourceModule::new().with_item(ModuleItem::Expr(Expr::Jsx(
            JsxElement::ident("div", sp()).with_attr(JsxAttr::string(
                "className",
                value,
                Span::new(2, 9),
            )),
        )))
    }

    #[test]
    fn font_size_flags_denied_steps() {
        let diags = check_consumer(
            &OffScaleUtilities::font_size(),
            &div_with_class("text-base text-sm text-9xl"),
        );
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].data.get("token").map(String::as_str), Some("text-base"));
        assert_eq!(diags[1].data.get("token").map(String::as_str), Some("text-9xl"));
    }

    #[test]
    fn duplicate_tokens_are_separate_findings_at_same_location() {
        let diags = check_consumer(
            &OffScaleUtilities::shadow(),
            &div_with_class("shadow-3xl shadow-3xl"),
        );
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].location, diags[1].location);
    }

    #[test]
    fn color_respects_allow_over_deny() {
        let diags = check_consumer(
            &OffScaleUtilities::color(),
            &div_with_class("bg-red-500 bg-primary/50 bg-[var(--brand)]"),
        );
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].data.get("token").map(String::as_str), Some("bg-red-500"));
    }

    #[test]
    fn standalone_string_literal_is_checked() {
        let module = SourceModule::new().with_item(ModuleItem::Expr(Expr::Str(StrLit::new(
            "leading-snug",
            sp(),
        ))));
        let diags = check_consumer(&OffScaleUtilities::line_height(), &module);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn standalone_template_checks_quasis_independently() {
        // `text-${size}base` must not merge into a denied `text-base`.
        let module = SourceModule::new().with_item(ModuleItem::Expr(Expr::Template(
            TemplateLit::new(["text-", "base"], 1, sp()),
        )));
        assert!(check_consumer(&OffScaleUtilities::font_size(), &module).is_empty());
    }

    #[test]
    fn class_attr_template_is_not_double_reported() {
        let module = SourceModule::new().with_item(ModuleItem::Expr(Expr::Jsx(
            JsxElement::ident("div", sp()).with_attr(JsxAttr::container(
                "className",
                ContainerExpr::Template(TemplateLit::new(
                    ["duration-300 ", " ease-out"],
                    1,
                    sp(),
                )),
                sp(),
            )),
        )));
        let diags = check_consumer(&OffScaleUtilities::motion_duration(), &module);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn non_class_attribute_strings_are_standalone_literals() {
        let module = SourceModule::new().with_item(ModuleItem::Expr(Expr::Jsx(
            JsxElement::ident("section", sp()).with_attr(JsxAttr::string(
                "data-theme",
                "bg-pink-300",
                sp(),
            )),
        )));
        assert_eq!(check_consumer(&OffScaleUtilities::color(), &module).len(), 1);
    }

    #[test]
    fn library_and_demo_files_are_skipped() {
        let module = div_with_class("text-base");
        for path in [
            "/repo/packages/foundation/src/Text.tsx",
            "/repo/apps/web/Text.stories.tsx",
            "/repo/dist/out.js",
        ] {
            let ctx = FileContext::new(Path::new(path), Path::new("/repo"));
            assert!(
                OffScaleUtilities::font_size().check(&ctx, &module).is_empty(),
                "{path}"
            );
        }
    }

    #[test]
    fn motion_allows_unlisted_durations() {
        let diags = check_consumer(
            &OffScaleUtilities::motion_duration(),
            &div_with_class("duration-200 duration-500"),
        );
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].data.get("token").map(String::as_str),
            Some("duration-500")
        );
    }
}
