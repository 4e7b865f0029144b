//! Conversion configuration.
//!
//! Bundles the input path and output envelope identity into one struct so the
//! pipeline takes explicit parameters instead of reaching for the hardcoded
//! constants directly. No config file, flags, or environment variables are
//! consulted; the defaults come from `constants`.

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_KEYMAP_NAME, DEFAULT_PREFS_PATH, DEFAULT_VERSION};

/// Parameters for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Path to the input preference file.
    pub prefs_path: PathBuf,
    /// Keymap name written into the output document.
    pub keymap_name: String,
    /// Version string written into the output document (conventionally a date).
    pub version: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            prefs_path: PathBuf::from(DEFAULT_PREFS_PATH),
            keymap_name: DEFAULT_KEYMAP_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl ConvertConfig {
    /// Creates a configuration whose keymap name is derived from the input path.
    ///
    /// # Arguments
    ///
    /// * `prefs_path` - Path to the input preference file
    /// * `version` - Version string for the output document
    pub fn for_prefs_path(prefs_path: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        let prefs_path = prefs_path.into();
        let keymap_name = keymap_name_from_path(&prefs_path);
        Self {
            prefs_path,
            keymap_name,
            version: version.into(),
        }
    }

    /// Returns the output file name, `<keymap_name>_<version>_js.json`.
    ///
    /// The file is written to the working directory.
    pub fn output_filename(&self) -> String {
        format!("{}_{}_js.json", self.keymap_name, self.version)
    }
}

/// Derives a keymap name from a preference file path.
///
/// Deletes the `_Game` suffix, the `.prefs` extension, and any remaining
/// dot and path-separator characters, so `./CheeseBerry_Game.prefs`
/// becomes `CheeseBerry`.
pub fn keymap_name_from_path(path: &Path) -> String {
    path.to_string_lossy()
        .replace("_Game", "")
        .replace(".prefs", "")
        .replace(['.', '/', '\\'], "")
}
