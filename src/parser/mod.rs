//! Parsing for the Lua-style preference file format.
//!
//! This module extracts key-binding pairs from the named key-map table in a
//! game preference file.

pub mod prefs;

// Re-export commonly used items
pub use prefs::{extract_key_map, KeyBindingPair};
