use serde::{Serialize, de::DeserializeOwned};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::Result;

/// Fixed keys of the profile store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    User,
    Teams,
    Theme,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "hackmatch_user",
            Self::Teams => "hackmatch_teams",
            Self::Theme => "hackmatch_theme",
        }
    }

    pub fn all() -> &'static [StoreKey] {
        &[Self::User, Self::Teams, Self::Theme]
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key-value store holding one JSON document per key under a directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: StoreKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }

    /// Reads `key`, falling back to `default` when the key is missing or its
    /// stored text cannot be decoded.
    pub async fn load_or<T: DeserializeOwned>(&self, key: StoreKey, default: T) -> T {
        let path = self.path_for(key);

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored value for '{}'", key);
                return default;
            }
            Err(e) => {
                warn!("Failed to read '{}' from {}: {}", key, path.display(), e);
                return default;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring corrupt stored value for '{}': {}", key, e);
                default
            }
        }
    }

    pub async fn save<T: Serialize>(&self, key: StoreKey, value: &T) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;

        let json = serde_json::to_string(value)?;
        tokio::fs::write(self.path_for(key), json).await?;

        debug!("Saved '{}'", key);
        Ok(())
    }

    pub async fn remove(&self, key: StoreKey) -> Result<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
