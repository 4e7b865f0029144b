//! On-disk keymap document structure.
//!
//! The field names and nesting mirror the format the consuming tool expects
//! and must be reproduced exactly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A two-element key binding: primary combination and secondary combination.
///
/// Serializes as a JSON array `["Ctrl + S", ""]`. The secondary slot is
/// always written as the empty string; this tool does not populate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding(pub String, pub String);

impl Binding {
    /// Creates a binding with the given primary key and an empty secondary.
    pub fn primary(key: impl Into<String>) -> Self {
        Self(key.into(), String::new())
    }
}

/// Top-level keymap document.
///
/// `contexts` maps context names to action-to-binding maps. This tool always
/// emits exactly one context. `BTreeMap` keeps the serialized file
/// deterministic; consumers must not rely on key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeymapDocument {
    /// Keymap name shown by the consuming tool.
    pub name: String,
    /// Version string, conventionally a date.
    pub version: String,
    /// Name of the context activated by default.
    pub default_context: String,
    /// Target operating systems.
    pub os: Vec<String>,
    /// Context name to action-to-binding map.
    pub contexts: BTreeMap<String, BTreeMap<String, Binding>>,
}
