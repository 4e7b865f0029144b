//! Prefs to Keymap Library
//!
//! This library converts a game's Lua-style input preference file into a
//! hotkey keymap JSON file: it extracts the key-map table from the
//! preference text, translates key names to their display form, and
//! assembles the keymap document the consuming tool expects.

// Module declarations
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
pub mod translator;
