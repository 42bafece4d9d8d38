use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use wordbox_config::Preferences;

pub struct AppState {
    pub prefs: Arc<RwLock<Preferences>>,
    /// Where preference changes are persisted.
    pub prefs_path: PathBuf,
}

impl AppState {
    pub fn new(prefs: Preferences) -> Self {
        Self::with_prefs_path(prefs, Preferences::path())
    }

    pub fn with_prefs_path(prefs: Preferences, prefs_path: PathBuf) -> Self {
        Self {
            prefs: Arc::new(RwLock::new(prefs)),
            prefs_path,
        }
    }
}
