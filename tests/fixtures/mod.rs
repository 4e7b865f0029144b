//! Shared test fixtures for E2E and pipeline tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Name the binary expects the preference file to have.
pub const PREFS_FILENAME: &str = "CheeseBerry_Game.prefs";

/// A realistic preference file with a key-map table and surrounding noise.
pub fn sample_prefs() -> &'static str {
    "\
version = 2
active_profile = 'default'
UserKeyMap = {
    ['Ctrl-S'] = 'SaveFile',
    F5 = 'Refresh',
    ['Ctrl-Equals'] = 'ZoomIn',
    [LeftBracket] = 'PrevTab',
    Tilde = 'ToggleConsole',
}
sound_volume = 80
"
}

/// A preference file without any key-map table assignment.
pub fn prefs_without_key_map() -> &'static str {
    "\
version = 2
SomeOtherTable = {
    A = 'B',
}
"
}

/// Writes `content` as the preference file into a fresh temp directory.
///
/// Returns the file path and the temp dir guard (keep it alive for the
/// duration of the test).
pub fn write_prefs_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let prefs_path = temp_dir.path().join(PREFS_FILENAME);
    fs::write(&prefs_path, content).expect("Failed to write prefs fixture");
    (prefs_path, temp_dir)
}
