//! Shared settings with optional persistence to a JSON file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use super::error::SettingsError;
use super::model::ScreenSettings;

/// Thread-safe screen settings.
///
/// With a file path, every accepted update is written to disk before it
/// becomes visible, so a failed write leaves both disk and memory on the
/// old settings.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    inner: Arc<RwLock<ScreenSettings>>,
    path: Option<PathBuf>,
}

impl SettingsStore {
    /// A store that lives only in memory, starting from defaults.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ScreenSettings::default())),
            path: None,
        }
    }

    /// Load settings from `path`, or start from defaults if it does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error rather
    /// than silently replaced.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();

        let settings = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            let settings: ScreenSettings = serde_json::from_str(&contents)?;
            settings.validate()?;
            info!(path = %path.display(), "loaded screen settings");
            settings
        } else {
            ScreenSettings::default()
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(settings)),
            path: Some(path),
        })
    }

    /// Current settings.
    pub async fn get(&self) -> ScreenSettings {
        self.inner.read().await.clone()
    }

    /// Validate, persist and apply new settings.
    ///
    /// The write lock is held across the file write so concurrent updates
    /// reach disk in the same order they reach memory.
    pub async fn update(&self, settings: ScreenSettings) -> Result<(), SettingsError> {
        settings.validate()?;
        let json = serde_json::to_string_pretty(&settings)?;

        let mut guard = self.inner.write().await;
        if let Some(path) = &self.path {
            save(path, json).await?;
        }
        *guard = settings;

        Ok(())
    }
}

/// Write serialized settings, creating parent directories if needed.
async fn save(path: &Path, json: String) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, json).await?;
    Ok(())
}
