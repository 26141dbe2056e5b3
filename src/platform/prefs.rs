// SentryView - platform/prefs.rs
//
// Persisted user preferences. The theme preference is the application's
// only persisted state.
//
// Design principles:
// - Preferences are saved atomically (write→temp, rename→final) so a
//   crash during save never corrupts the previous good file.
// - Load errors are silently discarded (a corrupt or incompatible file
//   just means defaults, never an error surfaced to the user).
// - The data directory is created on first save; no user action required.

use crate::core::model::ThemePreference;
use crate::util::constants::PREFS_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment this constant whenever `Preferences` gains or removes fields
/// in a breaking way. Version mismatches silently discard the file.
pub const PREFS_VERSION: u32 = 1;

/// Persistent preferences snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct Preferences {
    /// Schema version — must equal `PREFS_VERSION` to be accepted.
    pub version: u32,

    /// Interface theme preference.
    #[serde(default)]
    pub theme: ThemePreference,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            version: PREFS_VERSION,
            theme: ThemePreference::default(),
        }
    }
}

/// Resolve the preferences file path from the platform data directory.
pub fn prefs_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PREFS_FILE_NAME)
}

/// Save `prefs` to `path` atomically (write temp → rename).
///
/// Creates all parent directories as needed. Returns a descriptive error
/// string suitable for a tracing warn! call; the caller decides whether
/// to surface it (typically it is logged and ignored).
pub fn save(prefs: &Preferences, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            format!(
                "cannot create preferences directory '{}': {e}",
                parent.display()
            )
        })?;
    }

    let json = serde_json::to_string_pretty(prefs)
        .map_err(|e| format!("failed to serialise preferences: {e}"))?;

    // Atomic write: write to a sibling temp file then rename. A crash
    // between write and rename loses the new preferences but never
    // corrupts the previous ones.
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(|e| {
        format!(
            "failed to write preferences temp file '{}': {e}",
            tmp.display()
        )
    })?;

    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        format!(
            "failed to finalise preferences file '{}': {e}",
            path.display()
        )
    })?;

    tracing::debug!(path = %path.display(), "Preferences saved");
    Ok(())
}

/// Load and validate a `Preferences` from `path`.
///
/// Returns `None` on any error (file not found, JSON parse failure,
/// version mismatch). The caller should treat `None` as "use defaults".
pub fn load(path: &Path) -> Option<Preferences> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            // Distinguish "file not found" (normal first run) from other errors.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read preferences file");
            }
        })
        .ok()?;

    let prefs: Preferences = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Preferences file is malformed — using defaults"
            );
        })
        .ok()?;

    if prefs.version != PREFS_VERSION {
        tracing::warn!(
            found = prefs.version,
            expected = PREFS_VERSION,
            "Preferences file version mismatch — using defaults"
        );
        return None;
    }

    tracing::debug!(path = %path.display(), "Preferences loaded");
    Some(prefs)
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Save and load must round-trip the theme accurately.
    #[test]
    fn test_prefs_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        let original = Preferences {
            version: PREFS_VERSION,
            theme: ThemePreference::Dark,
        };

        save(&original, &path).expect("save should succeed");
        let loaded = load(&path).expect("load should return Some after valid save");

        assert_eq!(loaded.version, PREFS_VERSION);
        assert_eq!(loaded.theme, ThemePreference::Dark);
    }

    /// Load must return None when the file does not exist (first run).
    #[test]
    fn test_prefs_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join("nonexistent.json")).is_none());
    }

    /// Load must return None when the JSON is malformed rather than panicking.
    #[test]
    fn test_prefs_load_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        assert!(load(&path).is_none());
    }

    /// Load must return None when the version field is wrong.
    #[test]
    fn test_prefs_load_wrong_version_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        let data = Preferences {
            version: 99,
            theme: ThemePreference::Light,
        };
        save(&data, &path).unwrap();
        assert!(load(&path).is_none());
    }

    /// Save must create missing parent directories.
    #[test]
    fn test_prefs_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("prefs.json");
        save(&Preferences::default(), &path).expect("save should create parents");
        assert!(load(&path).is_some());
    }

    /// A leftover temp file from a previous crash must not break saving.
    #[test]
    fn test_prefs_save_atomic_overwrites_stale_temp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        save(&Preferences::default(), &path).unwrap();
        std::fs::write(path.with_extension("json.tmp"), b"garbage").unwrap();

        let updated = Preferences {
            version: PREFS_VERSION,
            theme: ThemePreference::Light,
        };
        save(&updated, &path).unwrap();

        assert_eq!(load(&path).unwrap().theme, ThemePreference::Light);
    }
}
