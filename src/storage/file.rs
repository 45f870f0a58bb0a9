// ABOUTME: File-backed key-value store keeping one file per key in a data directory
// ABOUTME: File contents are the raw stored value; writes go through a temp file and rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use bmi_core::errors::{AppError, AppResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Suffix for in-flight writes
const TEMP_SUFFIX: &str = "tmp";

/// File-backed key-value store
///
/// Each key maps to `<root>/<key>`. Keys are restricted to ASCII letters,
/// digits, `-` and `_` so they can never escape the data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created
    pub async fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to create data directory {}: {e}",
                root.display()
            ))
            .with_source(e)
        })?;
        debug!(path = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    /// Directory holding the stored files
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(AppError::invalid_input(format!(
                "Invalid storage key '{key}': use letters, digits, '-' or '_'"
            )));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(
                AppError::storage(format!("Failed to read {}: {e}", path.display()))
                    .with_source(e),
            ),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension(TEMP_SUFFIX);

        fs::write(&temp_path, value).await.map_err(|e| {
            AppError::storage(format!("Failed to write {}: {e}", temp_path.display()))
                .with_source(e)
        })?;
        fs::rename(&temp_path, &path).await.map_err(|e| {
            AppError::storage(format!("Failed to replace {}: {e}", path.display()))
                .with_source(e)
        })?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(
                AppError::storage(format!("Failed to remove {}: {e}", path.display()))
                    .with_source(e),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        for key in ["", "../escape", "a/b", "with.dot"] {
            let error = store.get(key).await.unwrap_err();
            assert!(error.is_validation(), "key {key:?} should be rejected");
        }
    }
}
