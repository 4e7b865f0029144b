//! Prefs to Keymap - converts a game preference file into a hotkey keymap.
//!
//! Reads the preference file from its fixed relative path, extracts and
//! translates the key bindings, and writes `<name>_<version>_js.json` to
//! the working directory. There are no flags or arguments.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use prefs2keymap::config::ConvertConfig;
use prefs2keymap::constants::{APP_NAME, KEY_MAP_TABLE};
use prefs2keymap::parser::{extract_key_map, KeyBindingPair};
use prefs2keymap::translator::translate_key;
use prefs2keymap::{export, models::KeymapDocument};

fn main() -> Result<()> {
    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!();

    let config = ConvertConfig::default();
    let document = convert(&config)?;

    let output_filename = config.output_filename();
    export::write_keymap(&document, Path::new(&output_filename))?;
    println!("JSON data saved to {output_filename}");

    Ok(())
}

/// Runs the extract-translate-assemble pipeline for one preference file.
fn convert(config: &ConvertConfig) -> Result<KeymapDocument> {
    let prefs_content = fs::read_to_string(&config.prefs_path).context(format!(
        "Failed to read preference file: {}",
        config.prefs_path.display()
    ))?;

    let pairs: Vec<KeyBindingPair> = extract_key_map(&prefs_content, KEY_MAP_TABLE)
        .into_iter()
        .map(|pair| KeyBindingPair {
            key: translate_key(&pair.key),
            action: pair.action,
        })
        .collect();

    let bindings = export::assemble_bindings(&pairs);

    // Diagnostic aid for inspecting the translated bindings; not a stable
    // output format.
    println!("{bindings:#?}");

    Ok(export::build_document(config, bindings))
}
