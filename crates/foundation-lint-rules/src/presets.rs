//! Rule presets for common configurations.

use crate::{
    NoAsChild, NoClassNameProp, NoDeepImport, NoStyleProp, NoUntypedPropSpread, NoUtilityWrapper,
    OffScaleUtilities, PreferFoundationComponent, RequiredContractProps,
};
use foundation_lint_core::RuleBox;

/// Preset configurations for foundation-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// Every rule, scale enforcement included.
    Strict,
    /// Minimal rules for gradual adoption.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => all_rules(),
            Self::Minimal => minimal_rules(),
        }
    }
}

/// Returns the recommended set of rules: every contract check except the
/// scale-enforcement family.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NoClassNameProp::new()),
        Box::new(NoStyleProp::new()),
        Box::new(NoDeepImport::new()),
        Box::new(NoUntypedPropSpread::new()),
        Box::new(PreferFoundationComponent::new()),
        Box::new(NoUtilityWrapper::new()),
        Box::new(RequiredContractProps::new()),
        Box::new(NoAsChild::new()),
    ]
}

/// Returns the minimal set of rules.
///
/// For gradual adoption: only the two styling-prop contracts and the
/// deep-import ban.
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NoClassNameProp::new()),
        Box::new(NoStyleProp::new()),
        Box::new(NoDeepImport::new()),
    ]
}

/// Returns all available rules in code order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NoClassNameProp::new()),
        Box::new(NoStyleProp::new()),
        Box::new(NoDeepImport::new()),
        Box::new(NoUntypedPropSpread::new()),
        Box::new(PreferFoundationComponent::new()),
        Box::new(NoUtilityWrapper::new()),
        Box::new(OffScaleUtilities::font_size()),
        Box::new(OffScaleUtilities::line_height()),
        Box::new(OffScaleUtilities::shadow()),
        Box::new(OffScaleUtilities::motion_duration()),
        Box::new(OffScaleUtilities::color()),
        Box::new(RequiredContractProps::new()),
        Box::new(NoAsChild::new()),
    ]
}
