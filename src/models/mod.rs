//! Data models for the output keymap document.
//!
//! Models are plain serde types, independent of the parsing and export logic.

pub mod keymap;

// Re-export all model types
pub use keymap::{Binding, KeymapDocument};
