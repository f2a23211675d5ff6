//! End-to-end contract scenarios through the full engine.

mod common;

use common::{
    import_default, import_named, module, rendered, sp, strict_engine, CONSUMER_FILE,
    LIBRARY_FILE,
};
use foundation_lint::ast::{
    ContainerExpr, Ident, JsxAttr, JsxChild, JsxElement, ObjectLit, SpreadArg,
};
use std::path::Path;

#[test]
fn class_name_on_imported_button_is_one_diagnostic() {
    let engine = strict_engine();
    let m = module(vec![
        import_named("@canvas/foundation", &["Button"]),
        rendered(
            JsxElement::ident("Button", sp(3, 2)).with_attr(JsxAttr::string(
                "className",
                "x",
                sp(3, 10),
            )),
        ),
    ]);
    let result = engine.check_module(Path::new(CONSUMER_FILE), &m);

    assert_eq!(result.diagnostics.len(), 1);
    let d = &result.diagnostics[0];
    assert_eq!(d.rule, "no-class-name-prop");
    assert_eq!(d.message_id, "noClassName");
    assert_eq!(d.data.get("component").map(String::as_str), Some("Button"));
}

#[test]
fn deep_import_plus_style_are_two_diagnostics() {
    let engine = strict_engine();
    let m = module(vec![
        import_default("@canvas/foundation/components/Button", "Button"),
        rendered(JsxElement::ident("Button", sp(3, 2)).with_attr(JsxAttr::container(
            "style",
            ContainerExpr::Object(ObjectLit { span: sp(3, 16) }),
            sp(3, 9),
        ))),
    ]);
    let result = engine.check_module(Path::new(CONSUMER_FILE), &m);

    assert_eq!(result.diagnostics.len(), 2);
    let rules: Vec<&str> = result.diagnostics.iter().map(|d| d.rule.as_str()).collect();
    assert!(rules.contains(&"no-deep-import"));
    assert!(rules.contains(&"no-style-prop"));
    // The deep-import finding points at the import line, the style finding
    // at the attribute.
    let deep = result
        .diagnostics
        .iter()
        .find(|d| d.rule == "no-deep-import")
        .expect("deep-import diagnostic");
    assert_eq!(deep.location.line, 1);
}

#[test]
fn utility_wrapper_flags_and_custom_wrapper_does_not() {
    let engine = strict_engine();

    let wrapper = |class: &str| {
        module(vec![
            import_named("@canvas/foundation", &["Button"]),
            rendered(
                JsxElement::ident("div", sp(3, 2))
                    .with_attr(JsxAttr::string("className", class, sp(3, 7)))
                    .with_child(JsxChild::Element(JsxElement::ident("Button", sp(4, 4)))),
            ),
        ])
    };

    let flagged = engine.check_module(Path::new(CONSUMER_FILE), &wrapper("p-4"));
    assert_eq!(flagged.diagnostics.len(), 1);
    assert_eq!(flagged.diagnostics[0].rule, "no-utility-wrapper");
    assert_eq!(flagged.diagnostics[0].location.line, 3);

    let clean = engine.check_module(Path::new(CONSUMER_FILE), &wrapper("custom-wrapper"));
    assert!(clean.diagnostics.is_empty());
}

#[test]
fn spread_allowances() {
    let engine = strict_engine();
    let spreading = |arg: SpreadArg| {
        module(vec![
            import_named("@canvas/foundation", &["Button"]),
            rendered(
                JsxElement::ident("Button", sp(3, 2)).with_attr(JsxAttr::spread(arg, sp(3, 10))),
            ),
        ])
    };

    let generic = engine.check_module(
        Path::new(CONSUMER_FILE),
        &spreading(SpreadArg::Ident(Ident::new("props", sp(3, 14)))),
    );
    assert_eq!(generic.diagnostics.len(), 1);
    assert_eq!(generic.diagnostics[0].rule, "no-untyped-prop-spread");

    let typed = engine.check_module(
        Path::new(CONSUMER_FILE),
        &spreading(SpreadArg::Ident(Ident::new("buttonProps", sp(3, 14)))),
    );
    assert!(typed.diagnostics.is_empty());

    let inline = engine.check_module(
        Path::new(CONSUMER_FILE),
        &spreading(SpreadArg::Object(ObjectLit { span: sp(3, 14) })),
    );
    assert!(inline.diagnostics.is_empty());
}

#[test]
fn library_source_yields_no_foundation_diagnostics() {
    let engine = strict_engine();
    let m = module(vec![
        import_named("@canvas/foundation", &["Button"]),
        rendered(JsxElement::ident("Button", sp(3, 2)).with_attr(JsxAttr::string(
            "className",
            "internal",
            sp(3, 10),
        ))),
    ]);
    let result = engine.check_module(Path::new(LIBRARY_FILE), &m);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn raw_p_flags_only_when_alternative_is_imported() {
    let engine = strict_engine();

    let with_import = module(vec![
        import_named("@canvas/foundation", &["Text"]),
        rendered(JsxElement::ident("p", sp(4, 2))),
    ]);
    let result = engine.check_module(Path::new(CONSUMER_FILE), &with_import);
    assert_eq!(result.diagnostics.len(), 1);
    let d = &result.diagnostics[0];
    assert_eq!(d.rule, "prefer-foundation-component");
    assert_eq!(d.data.get("tag").map(String::as_str), Some("p"));
    assert_eq!(d.data.get("alternatives").map(String::as_str), Some("Text"));

    let without_import = module(vec![rendered(JsxElement::ident("p", sp(4, 2)))]);
    let result = engine.check_module(Path::new(CONSUMER_FILE), &without_import);
    assert!(result.diagnostics.is_empty());
}
