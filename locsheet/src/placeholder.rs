//! Placeholder detection for Android's `formatted="false"` attribute.
//!
//! Android runs `String.format` over resource strings that look formatted.
//! Strings that only use brace placeholders (`{name}`) have to opt out, but as
//! soon as a printf placeholder is present the string must stay formatted.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // %s, %d, %1$s, %2$d, ...
    static ref PRINTF_PLACEHOLDER_REGEX: Regex = Regex::new(r"%\d*\$?[sd]").unwrap();
}

/// Returns `true` if `text` contains a printf-style placeholder.
pub fn has_printf_placeholder(text: &str) -> bool {
    PRINTF_PLACEHOLDER_REGEX.is_match(text)
}

/// Returns `true` if `text` contains a brace (`{` or `}`).
pub fn has_brace_placeholder(text: &str) -> bool {
    text.contains(['{', '}'])
}

/// Decides whether an Android `<string>` needs `formatted="false"`.
///
/// The attribute is required when the text uses braces and has no printf
/// placeholder.
pub fn needs_formatted_false(text: &str) -> bool {
    has_brace_placeholder(text) && !has_printf_placeholder(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_brace_placeholder_needs_formatted_false() {
        assert!(needs_formatted_false("Hello {name}"));
        assert!(needs_formatted_false("{"));
        assert!(needs_formatted_false("closing } only"));
    }

    #[test]
    fn test_printf_placeholder_keeps_formatting() {
        assert!(!needs_formatted_false("Hello {name}, you are %1$s"));
        assert!(!needs_formatted_false("{count} of %d"));
        assert!(!needs_formatted_false("{x} %s"));
        assert!(!needs_formatted_false("{x} %12$d"));
    }

    #[test]
    fn test_plain_text_keeps_formatting() {
        assert!(!needs_formatted_false("Hello world"));
        assert!(!needs_formatted_false("100% sure"));
        assert!(!needs_formatted_false(""));
    }

    #[test]
    fn test_other_printf_kinds_are_not_recognized() {
        // Only string and integer conversions count.
        assert!(needs_formatted_false("{x} %f"));
        assert!(needs_formatted_false("{x} %@"));
    }

    proptest! {
        #[test]
        fn brace_without_percent_always_needs_formatted_false(
            prefix in "[A-Za-z0-9 ,.!]{0,20}",
            name in "[a-z_]{1,10}",
            suffix in "[A-Za-z0-9 ,.!]{0,20}",
        ) {
            let text = format!("{prefix}{{{name}}}{suffix}");
            prop_assert!(needs_formatted_false(&text));
        }

        #[test]
        fn positional_placeholder_disables_attribute(
            name in "[a-z_]{1,10}",
            position in 1u32..20,
            kind in prop::sample::select(vec!['s', 'd']),
        ) {
            let text = format!("{{{name}}} and %{position}${kind}");
            prop_assert!(!needs_formatted_false(&text));
        }

        #[test]
        fn text_without_braces_never_needs_attribute(text in "[^{}]{0,40}") {
            prop_assert!(!needs_formatted_false(&text));
        }
    }
}
