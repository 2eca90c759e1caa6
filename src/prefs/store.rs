//! TOML-backed key-value store shared across screens.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::prefs::types::{keys, NarrationPrefs, SettingsSnapshot, DEFAULT_FONT_SIZE};

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Failed to read preference file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preference file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write preference file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Cloneable handle to the preference file.
///
/// The file is loaded once at open; this store is the only writer, so
/// reads are served from memory and every mutation is persisted before
/// returning.
#[derive(Clone)]
pub struct PrefStore {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
    path: PathBuf,
}

impl PrefStore {
    /// `~/.config/eternum/prefs.toml` (or the platform equivalent).
    /// Falls back to the current directory if no config dir exists.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("eternum").join("prefs.toml")
    }

    /// Opens the store, creating an empty one when the file is missing.
    pub async fn open(path: PathBuf) -> Result<Self, PrefsError> {
        let map = if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            let content =
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| PrefsError::ReadError {
                        path: path.clone(),
                        source: e,
                    })?;
            toml::from_str(&content).map_err(|e| PrefsError::ParseError {
                path: path.clone(),
                source: e,
            })?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(map)),
            path,
        })
    }

    /// Empty store at `path` for when the file cannot be read; later
    /// writes may still succeed.
    pub fn fallback(path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.inner.read().get(key).cloned()
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        {
            let mut map = self.inner.write();
            map.insert(key.to_string(), value.to_string());
        }
        self.persist().await
    }

    pub async fn remove_many(&self, remove: &[&str]) -> Result<(), PrefsError> {
        {
            let mut map = self.inner.write();
            for key in remove {
                map.remove(*key);
            }
        }
        self.persist().await
    }

    async fn persist(&self) -> Result<(), PrefsError> {
        let content = {
            let map = self.inner.read();
            toml::to_string(&*map).unwrap_or_default()
        };
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PrefsError::WriteError {
                    path: self.path.clone(),
                    source: e,
                })?;
        }
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| PrefsError::WriteError {
                path: self.path.clone(),
                source: e,
            })
    }

    async fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key).await {
            Some(v) => v == "true",
            None => default,
        }
    }

    /// Snapshot for the narration layer. Never fails; missing or
    /// malformed entries read as the defaults.
    pub async fn narration_prefs(&self) -> NarrationPrefs {
        NarrationPrefs {
            screen_reader: self.get_bool(keys::SCREEN_READER, false).await,
            speak_menus: self.get_bool(keys::SPEAK_MENUS, false).await,
            ..NarrationPrefs::default()
        }
    }

    /// Snapshot for the settings screen.
    pub async fn settings_snapshot(&self) -> SettingsSnapshot {
        let font_size = match self.get(keys::FONT_SIZE).await {
            Some(v) => v.parse().unwrap_or(DEFAULT_FONT_SIZE),
            None => DEFAULT_FONT_SIZE,
        };
        SettingsSnapshot {
            notifications: self.get_bool(keys::NOTIFICATIONS, false).await,
            font_size,
            screen_reader: self.get_bool(keys::SCREEN_READER, false).await,
            audio: self.get_bool(keys::AUDIO, true).await,
            speak_menus: self.get_bool(keys::SPEAK_MENUS, false).await,
        }
    }

    /// Whether the ambient audio should play at all.
    pub async fn audio_enabled(&self) -> bool {
        self.get_bool(keys::AUDIO, true).await
    }

    pub async fn set_bool(&self, key: &str, value: bool) -> Result<(), PrefsError> {
        self.set(key, if value { "true" } else { "false" }).await
    }

    /// Clears every resettable key; the file keeps transient entries.
    pub async fn reset_settings(&self) -> Result<(), PrefsError> {
        self.remove_many(keys::RESETTABLE).await
    }
}
