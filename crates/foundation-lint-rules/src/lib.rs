//! # foundation-lint-rules
//!
//! Built-in usage-contract rules for foundation-lint.
//!
//! Each rule protects one contract of the Foundation component set. Rules
//! share the core's scope classifier, import resolver, and token
//! vocabularies; every one is a fixed, non-configurable check beyond its
//! severity.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | FC001 | `no-class-name-prop` | Forbids `className` on Foundation components |
//! | FC002 | `no-style-prop` | Forbids inline `style` on Foundation components |
//! | FC003 | `no-deep-import` | Forbids deep imports into the Foundation packages |
//! | FC004 | `no-untyped-prop-spread` | Forbids spreading untyped values into Foundation components |
//! | FC005 | `prefer-foundation-component` | Prefers imported components over raw HTML elements |
//! | FC006 | `no-utility-wrapper` | Forbids generic utility classes on wrappers of components |
//! | FC007 | `font-size-scale` | Forbids font-size utilities outside the type ramp |
//! | FC008 | `line-height-scale` | Forbids line-height utilities outside the type ramp |
//! | FC009 | `shadow-scale` | Forbids shadows outside the elevation steps |
//! | FC010 | `motion-duration-scale` | Forbids raw millisecond durations over motion tokens |
//! | FC011 | `color-token-scale` | Forbids raw palette colors over semantic tokens |
//! | FC012 | `required-contract-props` | Requires the contract props of specific components |
//! | FC013 | `no-as-child` | Forbids the `asChild` composition escape on `Button` |
//!
//! ## Usage
//!
//! ```ignore
//! use foundation_lint_rules::{NoClassNameProp, NoDeepImport};
//!
//! let diagnostics = NoClassNameProp::new().check(&ctx, &module);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod no_as_child;
mod no_class_name_prop;
mod no_deep_import;
mod no_style_prop;
mod no_untyped_prop_spread;
mod no_utility_wrapper;
mod off_scale_utilities;
mod prefer_foundation_component;
mod presets;
mod required_props;
mod support;

pub use no_as_child::NoAsChild;
pub use no_class_name_prop::NoClassNameProp;
pub use no_deep_import::NoDeepImport;
pub use no_style_prop::NoStyleProp;
pub use no_untyped_prop_spread::NoUntypedPropSpread;
pub use no_utility_wrapper::NoUtilityWrapper;
pub use off_scale_utilities::OffScaleUtilities;
pub use prefer_foundation_component::PreferFoundationComponent;
pub use presets::{all_rules, minimal_rules, recommended_rules, Preset};
pub use required_props::RequiredContractProps;

/// Re-export core types for convenience.
pub use foundation_lint_core::{Diagnostic, Rule, Severity};
