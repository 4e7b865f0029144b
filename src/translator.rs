//! Key-name translation from the preference-file convention to the keymap
//! display convention.
//!
//! Translation is an ordered table of literal substring substitutions.
//! Decoration stripping runs first, then the hyphen-to-chord expansion,
//! then symbolic token expansion, so `['Ctrl-LeftBracket']` becomes
//! `Ctrl + [` without the introduced `[` being re-expanded.

/// Ordered substitution rules. Order is significant: later rules operate on
/// text produced by earlier ones, and output is only byte-identical if the
/// order is preserved.
const TRANSLATION_RULES: &[(&str, &str)] = &[
    ("[", ""),
    ("]", ""),
    ("'", ""),
    ("\"", ""),
    ("-", " + "),
    ("LeftBracket", "["),
    ("RightBracket", "]"),
    ("Equals", "="),
    ("NumStar", "*"),
    ("Quote", "'"),
    ("NumSlash", "/"),
    ("Slash", "/"),
    ("Tilde", "`"),
    ("Backslash", "\\"),
    ("Semicolon", ";"),
    ("Period", "."),
];

/// Upper bound on replacements per rule. The fixed table above never
/// reaches it; it exists so a rule whose replacement reintroduces its own
/// pattern cannot loop forever.
const MAX_RULE_ITERATIONS: usize = 1000;

/// Translates a raw key token into its display form.
///
/// Each rule is applied to fixpoint before moving to the next: while the
/// string still contains the pattern, the first occurrence is replaced.
/// Keys using none of the rules pass through unchanged.
///
/// # Examples
///
/// ```
/// use prefs2keymap::translator::translate_key;
///
/// assert_eq!(translate_key("['Ctrl-S']"), "Ctrl + S");
/// assert_eq!(translate_key("Ctrl-Equals"), "Ctrl + =");
/// assert_eq!(translate_key("F5"), "F5");
/// ```
pub fn translate_key(raw: &str) -> String {
    let mut key = raw.to_string();
    for (pattern, replacement) in TRANSLATION_RULES {
        let mut iterations = 0;
        while key.contains(pattern) {
            key = key.replacen(pattern, replacement, 1);
            iterations += 1;
            if iterations >= MAX_RULE_ITERATIONS {
                break;
            }
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_key_is_identity() {
        assert_eq!(translate_key("F5"), "F5");
        assert_eq!(translate_key("Space"), "Space");
    }

    #[test]
    fn test_decoration_stripping_only() {
        assert_eq!(translate_key("['F5']"), "F5");
        assert_eq!(translate_key("[\"Home\"]"), "Home");
    }

    #[test]
    fn test_chord_expansion() {
        assert_eq!(translate_key("Ctrl-S"), "Ctrl + S");
        assert_eq!(translate_key("['Ctrl-Shift-S']"), "Ctrl + Shift + S");
    }

    #[test]
    fn test_symbolic_token_expansion() {
        assert_eq!(translate_key("Ctrl-Equals"), "Ctrl + =");
        assert_eq!(translate_key("[LeftBracket]"), "[");
        assert_eq!(translate_key("Tilde"), "`");
        assert_eq!(translate_key("NumStar"), "*");
        assert_eq!(translate_key("Backslash"), "\\");
    }

    #[test]
    fn test_introduced_bracket_is_not_reexpanded() {
        // Decoration stripping runs before token expansion, so the `[`
        // produced by LeftBracket survives.
        assert_eq!(translate_key("['Ctrl-LeftBracket']"), "Ctrl + [");
    }

    #[test]
    fn test_idempotent_on_translated_keys() {
        let once = translate_key("Ctrl-Period");
        assert_eq!(once, "Ctrl + .");
        assert_eq!(translate_key(&once), once);
    }

    #[test]
    fn test_repeated_pattern_hits_fixpoint() {
        assert_eq!(translate_key("Ctrl-Alt-Shift-Q"), "Ctrl + Alt + Shift + Q");
    }
}
