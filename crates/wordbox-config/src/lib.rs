use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wordbox_types::{Font, Theme};

/// Presentation preferences, persisted as a small JSON file. Missing file
/// or missing keys fall back to the documented defaults (light theme,
/// sans-serif font).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub font: Font,
}

impl Preferences {
    /// Resolve the preferences file location. `WORDBOX_CONFIG` overrides
    /// the platform config directory.
    pub fn path() -> PathBuf {
        if let Ok(path) = env::var("WORDBOX_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordbox")
            .join("preferences.json")
    }

    /// Read preferences from the default location, falling back to
    /// defaults on any failure.
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Self {
        match Self::read_file(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::debug!("no saved preferences ({e}), using defaults");
                Preferences::default()
            }
        }
    }

    fn read_file(path: &Path) -> Result<Self, std::io::Error> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(std::io::Error::other)
    }

    /// Persist to the default location. Best effort: failures are logged
    /// and never surfaced to the user.
    pub fn save(&self) {
        self.save_to(&Self::path());
    }

    pub fn save_to(&self, path: &Path) {
        if let Err(e) = self.write_file(path) {
            tracing::warn!("failed to save preferences to {}: {e}", path.display());
        }
    }

    fn write_file(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load_from(&dir.path().join("nope.json"));
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.font, Font::SansSerif);
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordbox").join("preferences.json");

        let prefs = Preferences {
            theme: Theme::Dark,
            font: Font::Serif,
        };
        prefs.save_to(&path);

        let loaded = Preferences::load_from(&path);
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.font, Font::SansSerif);
    }

    #[test]
    fn saving_never_panics_on_bad_path() {
        let prefs = Preferences::default();
        prefs.save_to(Path::new("/dev/null/not-a-dir/preferences.json"));
    }
}
