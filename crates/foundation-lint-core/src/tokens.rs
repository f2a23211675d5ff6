//! Closed utility-class vocabularies, one per visual scale.
//!
//! Each scale owns a deny set and an allow set over class tokens; allow
//! overrides deny. [`extract_tokens`] is the single shared tokenization
//! rule — whitespace-run splitting — used by every scale, and
//! [`find_violations`] reports every denied, non-allowed token in order,
//! duplicates included.

/// The visual scales with a closed token vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenScale {
    /// `text-*` font sizes.
    FontSize,
    /// `leading-*` line heights.
    LineHeight,
    /// `shadow-*` elevations.
    Shadow,
    /// `duration-*` motion durations.
    MotionDuration,
    /// Palette color utilities under the color-bearing prefixes.
    Color,
}

/// Classification of one token against one scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Explicitly permitted; overrides any deny match.
    Allowed,
    /// Off-scale; reported by [`find_violations`].
    Denied,
    /// Not governed by this scale.
    Irrelevant,
}

/// Font sizes outside the type ramp.
const FONT_SIZE_DENY: &[&str] = &["base", "5xl", "6xl", "7xl", "8xl", "9xl"];

/// Line heights that fight the type ramp.
const LINE_HEIGHT_DENY: &[&str] = &["none", "snug", "relaxed"];

/// The only sanctioned elevation steps.
const SHADOW_ALLOW: &[&str] = &["none", "xs", "sm", "md", "lg", "xl", "2xl"];

/// Raw millisecond durations that bypass the motion tokens.
const MOTION_DENY: &[&str] = &["150", "300", "500", "700", "1000"];

/// Utility prefixes that carry color.
const COLOR_PREFIXES: &[&str] = &["bg", "text", "border", "ring", "outline", "divide", "accent"];

/// Raw palette families; any `<prefix>-<family>-<shade>` token is denied.
const COLOR_PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

/// Semantic color tokens, permitted under any color-bearing prefix,
/// optionally with a `/<digits>` opacity suffix.
const COLOR_SEMANTIC_ALLOW: &[&str] = &[
    "background",
    "foreground",
    "primary",
    "secondary",
    "muted",
    "accent",
    "destructive",
    "success",
    "warning",
    "info",
    "card",
    "popover",
    "border",
    "ring",
];

/// Splits free class text into tokens on whitespace runs.
///
/// The single tokenization rule shared by every scale; leading, trailing,
/// and repeated whitespace never produce empty tokens.
pub fn extract_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Classifies one token against one scale. Allow overrides deny.
#[must_use]
pub fn classify(scale: TokenScale, token: &str) -> TokenClass {
    match scale {
        TokenScale::FontSize => deny_under_prefix(token, "text-", FONT_SIZE_DENY),
        TokenScale::LineHeight => deny_under_prefix(token, "leading-", LINE_HEIGHT_DENY),
        TokenScale::Shadow => match token.strip_prefix("shadow-") {
            Some(step) if SHADOW_ALLOW.contains(&step) => TokenClass::Allowed,
            Some(_) => TokenClass::Denied,
            None => TokenClass::Irrelevant,
        },
        TokenScale::MotionDuration => deny_under_prefix(token, "duration-", MOTION_DENY),
        TokenScale::Color => classify_color(token),
    }
}

/// Every denied, non-allowed token of `text`, in order, duplicates included.
#[must_use]
pub fn find_violations(text: &str, scale: TokenScale) -> Vec<String> {
    extract_tokens(text)
        .filter(|token| classify(scale, token) == TokenClass::Denied)
        .map(ToOwned::to_owned)
        .collect()
}

/// Whether a token reads as a generic layout/spacing utility.
///
/// Used by the wrapper detector to tell `className="p-4"` apart from a
/// project-specific class like `custom-wrapper`.
#[must_use]
pub fn is_generic_utility(token: &str) -> bool {
    const EXACT: &[&str] = &[
        "flex",
        "grid",
        "block",
        "inline",
        "inline-block",
        "inline-flex",
        "hidden",
        "relative",
        "absolute",
        "fixed",
        "sticky",
        "container",
    ];
    const PREFIXES: &[&str] = &[
        "p-", "px-", "py-", "pt-", "pb-", "pl-", "pr-", "m-", "mx-", "my-", "mt-", "mb-", "ml-",
        "mr-", "w-", "h-", "gap-", "space-", "flex-", "grid-", "items-", "justify-", "self-",
        "text-", "bg-", "border-", "rounded", "shadow", "overflow-", "z-", "inset-", "top-",
        "bottom-", "left-", "right-",
    ];

    EXACT.contains(&token) || PREFIXES.iter().any(|prefix| token.starts_with(prefix))
}

fn deny_under_prefix(token: &str, prefix: &str, deny: &[&str]) -> TokenClass {
    match token.strip_prefix(prefix) {
        Some(suffix) if deny.contains(&suffix) => TokenClass::Denied,
        _ => TokenClass::Irrelevant,
    }
}

fn classify_color(token: &str) -> TokenClass {
    for prefix in COLOR_PREFIXES {
        let Some(rest) = token
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('-'))
        else {
            continue;
        };

        // Raw CSS variable escape: `bg-[var(--brand)]`.
        if rest.starts_with("[var(--") && rest.ends_with(")]") {
            return TokenClass::Allowed;
        }

        // Semantic token, optionally `/<digits>` opacity: `bg-primary/50`.
        let base = match rest.split_once('/') {
            Some((base, opacity)) => {
                if opacity.is_empty() || !opacity.bytes().all(|b| b.is_ascii_digit()) {
                    rest
                } else {
                    base
                }
            }
            None => rest,
        };
        if COLOR_SEMANTIC_ALLOW.contains(&base) {
            return TokenClass::Allowed;
        }

        // Raw palette value: `bg-red-500`.
        if let Some((family, shade)) = rest.rsplit_once('-') {
            if !shade.is_empty()
                && shade.bytes().all(|b| b.is_ascii_digit())
                && COLOR_PALETTE.contains(&family)
            {
                return TokenClass::Denied;
            }
        }

        return TokenClass::Irrelevant;
    }
    TokenClass::Irrelevant
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_collapses_whitespace_runs() {
        let tokens: Vec<&str> = extract_tokens("  p-4\tflex\n  bg-red-500 ").collect();
        assert_eq!(tokens, vec!["p-4", "flex", "bg-red-500"]);
    }

    #[test]
    fn font_size_deny_set_is_total() {
        for step in FONT_SIZE_DENY {
            let token = format!("text-{step}");
            assert_eq!(classify(TokenScale::FontSize, &token), TokenClass::Denied, "{token}");
        }
        assert_eq!(classify(TokenScale::FontSize, "text-sm"), TokenClass::Irrelevant);
        assert_eq!(classify(TokenScale::FontSize, "text-4xl"), TokenClass::Irrelevant);
        assert_eq!(classify(TokenScale::FontSize, "leading-none"), TokenClass::Irrelevant);
    }

    #[test]
    fn line_height_deny_set_is_total() {
        for step in LINE_HEIGHT_DENY {
            let token = format!("leading-{step}");
            assert_eq!(classify(TokenScale::LineHeight, &token), TokenClass::Denied, "{token}");
        }
        assert_eq!(classify(TokenScale::LineHeight, "leading-tight"), TokenClass::Irrelevant);
    }

    #[test]
    fn shadow_allows_only_the_elevation_steps() {
        for step in SHADOW_ALLOW {
            let token = format!("shadow-{step}");
            assert_eq!(classify(TokenScale::Shadow, &token), TokenClass::Allowed, "{token}");
        }
        assert_eq!(classify(TokenScale::Shadow, "shadow-3xl"), TokenClass::Denied);
        assert_eq!(
            classify(TokenScale::Shadow, "shadow-[0_4px_6px_rgba(0,0,0,0.3)]"),
            TokenClass::Denied
        );
        // Bare `shadow` carries no suffix and is not governed here.
        assert_eq!(classify(TokenScale::Shadow, "shadow"), TokenClass::Irrelevant);
    }

    #[test]
    fn motion_denies_raw_durations() {
        for step in MOTION_DENY {
            let token = format!("duration-{step}");
            assert_eq!(
                classify(TokenScale::MotionDuration, &token),
                TokenClass::Denied,
                "{token}"
            );
        }
        assert_eq!(classify(TokenScale::MotionDuration, "duration-200"), TokenClass::Irrelevant);
    }

    #[test]
    fn color_denies_palette_shades_under_every_prefix() {
        for prefix in COLOR_PREFIXES {
            let token = format!("{prefix}-red-500");
            assert_eq!(classify(TokenScale::Color, &token), TokenClass::Denied, "{token}");
        }
        assert_eq!(classify(TokenScale::Color, "bg-slate-50"), TokenClass::Denied);
        assert_eq!(classify(TokenScale::Color, "divide-rose-950"), TokenClass::Denied);
    }

    #[test]
    fn color_allows_semantic_tokens() {
        assert_eq!(classify(TokenScale::Color, "bg-primary"), TokenClass::Allowed);
        assert_eq!(classify(TokenScale::Color, "text-muted"), TokenClass::Allowed);
        assert_eq!(classify(TokenScale::Color, "border-border"), TokenClass::Allowed);
        assert_eq!(classify(TokenScale::Color, "bg-accent"), TokenClass::Allowed);
    }

    #[test]
    fn color_allows_opacity_suffixed_semantic_tokens() {
        assert_eq!(classify(TokenScale::Color, "bg-primary/50"), TokenClass::Allowed);
        assert_eq!(classify(TokenScale::Color, "bg-primary/"), TokenClass::Irrelevant);
        assert_eq!(classify(TokenScale::Color, "bg-primary/x"), TokenClass::Irrelevant);
    }

    #[test]
    fn color_allows_css_variable_escape() {
        assert_eq!(
            classify(TokenScale::Color, "bg-[var(--brand-surface)]"),
            TokenClass::Allowed
        );
        assert_eq!(classify(TokenScale::Color, "bg-[red]"), TokenClass::Irrelevant);
    }

    #[test]
    fn color_ignores_non_palette_values() {
        assert_eq!(classify(TokenScale::Color, "bg-white"), TokenClass::Irrelevant);
        assert_eq!(classify(TokenScale::Color, "text-center"), TokenClass::Irrelevant);
        assert_eq!(classify(TokenScale::Color, "rounded-lg"), TokenClass::Irrelevant);
        // Shade must be numeric.
        assert_eq!(classify(TokenScale::Color, "bg-red-half"), TokenClass::Irrelevant);
    }

    #[test]
    fn find_violations_reports_in_order_with_duplicates() {
        let violations = find_violations(
            "bg-red-500 bg-primary bg-red-500  text-blue-100",
            TokenScale::Color,
        );
        assert_eq!(violations, vec!["bg-red-500", "bg-red-500", "text-blue-100"]);
    }

    #[test]
    fn find_violations_empty_text() {
        assert!(find_violations("", TokenScale::Color).is_empty());
        assert!(find_violations("   ", TokenScale::FontSize).is_empty());
    }

    #[test]
    fn generic_utility_predicate() {
        for token in ["p-4", "mx-auto", "flex", "items-center", "rounded-lg", "w-full"] {
            assert!(is_generic_utility(token), "{token}");
        }
        for token in ["custom-wrapper", "hero", "btn-primary", "Card"] {
            assert!(!is_generic_utility(token), "{token}");
        }
    }
}
