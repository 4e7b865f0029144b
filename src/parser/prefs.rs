//! Extractor for key bindings in a Lua-style preference file.
//!
//! The preference file assigns a table literal to a fixed identifier,
//! e.g. `UserKeyMap = { ['Ctrl-S'] = 'SaveFile', F5 = 'Refresh' }`.
//! Only the first such assignment is inspected; the rest of the file is
//! ignored.

use regex::Regex;

/// One raw key binding extracted from the key-map table.
///
/// `key` keeps whatever bracket/quote decoration the source used; stripping
/// and token expansion happen later in `translator`. `action` is the
/// single-quoted value with its quotes removed, the logical action name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindingPair {
    /// Raw key token as written in the source file.
    pub key: String,
    /// Action identifier bound to the key.
    pub action: String,
}

/// Extracts key-binding pairs from the first `<table_name> = { ... }`
/// assignment in `content`.
///
/// Pairs are returned in source order. Returns an empty vector when no
/// matching table assignment exists; text inside the body that does not
/// match the pair shape is skipped silently. Keys or values containing
/// unescaped delimiter characters are not supported and may mismatch.
pub fn extract_key_map(content: &str, table_name: &str) -> Vec<KeyBindingPair> {
    // Non-greedy body match, spanning newlines, up to the first `}`.
    let table_regex = Regex::new(&format!(
        r"(?s){}\s*=\s*\{{(.*?)\}}",
        regex::escape(table_name)
    ))
    .unwrap();

    let Some(body) = table_regex.captures(content).map(|c| c[1].to_string()) else {
        return Vec::new();
    };

    // Key is either a bracketed (optionally quoted) token or a bare identifier.
    let pair_regex =
        Regex::new(r#"(\[['"]?[\w\-\+\s]+['"]?\]|[\w\-]+)\s*=\s*'([^']+)'"#).unwrap();

    pair_regex
        .captures_iter(&body)
        .map(|caps| KeyBindingPair {
            key: caps[1].to_string(),
            action: caps[2].to_string(),
        })
        .collect()
}
