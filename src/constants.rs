//! Application-wide constants.
//!
//! These are the compile-time defaults for the reference conversion run.
//! `config::ConvertConfig` turns them into explicit parameters so library
//! callers are not tied to the hardcoded values.

/// The display name of the application.
pub const APP_NAME: &str = "Prefs to Keymap";

/// Default path of the input preference file, relative to the working directory.
pub const DEFAULT_PREFS_PATH: &str = "./CheeseBerry_Game.prefs";

/// Default name written into the output keymap document.
pub const DEFAULT_KEYMAP_NAME: &str = "CheeseBerryJS";

/// Default version string written into the output keymap document.
pub const DEFAULT_VERSION: &str = "2023-10-19";

/// Identifier of the table assignment holding the key bindings.
pub const KEY_MAP_TABLE: &str = "UserKeyMap";

/// Name of the single context populated in the output document.
pub const DEFAULT_CONTEXT: &str = "Global Context";

/// Target operating system listed in the output document.
pub const TARGET_OS: &str = "windows";
