//! File-based store.

use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, Result};

/// One JSON file per key under a base directory.
///
/// # File Format
///
/// Values are stored verbatim as `{key}.json`. Characters outside
/// `[A-Za-z0-9_-]` in a key are replaced with `_`. Writes go to a temporary
/// file first and are renamed into place, so a crash never leaves half a save.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a file store, creating `base_dir` if needed.
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path a key is stored at.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_dir.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path)?;
        tracing::debug!("Loaded {} from {}", key, path.display());

        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved {} to {}", key, path.display());

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted {}", key);
        }

        Ok(())
    }
}
