//! Assembly and serialization of the output keymap document.
//!
//! Takes translated key-binding pairs, builds the action-to-binding map,
//! wraps it in the fixed document envelope, and writes it as indented JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::ConvertConfig;
use crate::constants::{DEFAULT_CONTEXT, TARGET_OS};
use crate::models::{Binding, KeymapDocument};
use crate::parser::KeyBindingPair;

/// Builds the action-to-binding map from translated pairs.
///
/// Keys of the map are the action names (the value half of each source
/// pair); each binding carries the translated key as primary and an empty
/// secondary. When an action appears more than once, the later pair wins.
pub fn assemble_bindings(pairs: &[KeyBindingPair]) -> BTreeMap<String, Binding> {
    let mut bindings = BTreeMap::new();
    for pair in pairs {
        bindings.insert(pair.action.clone(), Binding::primary(pair.key.clone()));
    }
    bindings
}

/// Wraps an assembled binding map in the fixed document envelope.
///
/// The envelope carries the configured keymap name and version, the default
/// context name, the target OS list, and a `contexts` object with exactly
/// one entry keyed by the default context.
pub fn build_document(
    config: &ConvertConfig,
    bindings: BTreeMap<String, Binding>,
) -> KeymapDocument {
    let mut contexts = BTreeMap::new();
    contexts.insert(DEFAULT_CONTEXT.to_string(), bindings);

    KeymapDocument {
        name: config.keymap_name.clone(),
        version: config.version.clone(),
        default_context: DEFAULT_CONTEXT.to_string(),
        os: vec![TARGET_OS.to_string()],
        contexts,
    }
}

/// Serializes the document as 4-space-indented JSON and writes it to `path`.
///
/// An unwritable destination is fatal; there is no retry or partial-write
/// recovery.
pub fn write_keymap(document: &KeymapDocument, path: &Path) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document
        .serialize(&mut serializer)
        .context("Failed to serialize keymap document")?;

    fs::write(path, buffer).context(format!("Failed to write keymap: {}", path.display()))?;

    Ok(())
}
