// ABOUTME: Storage factory for configuration-based backend selection
// ABOUTME: Wraps the in-memory and file backends behind one cloneable type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{file::FileStore, memory::InMemoryStore, KeyValueStore};
use crate::config::environment::{StorageBackend, StorageConfig};
use bmi_core::errors::AppResult;
use tracing::info;

/// Unified storage handle
#[derive(Debug, Clone)]
pub enum Storage {
    /// Process-local map
    Memory(InMemoryStore),
    /// One file per key under a data directory
    File(FileStore),
}

impl Storage {
    /// Create the backend named by `config`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file backend's directory cannot be created
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        match config.backend {
            StorageBackend::Memory => {
                info!("Initializing in-memory storage (history is not persisted)");
                Ok(Self::Memory(InMemoryStore::new()))
            }
            StorageBackend::File => {
                info!(
                    path = %config.data_dir.display(),
                    "Initializing file storage"
                );
                Ok(Self::File(FileStore::open(&config.data_dir).await?))
            }
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for Storage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Self::Memory(store) => store.get(key).await,
            Self::File(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.set(key, value).await,
            Self::File(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.remove(key).await,
            Self::File(store) => store.remove(key).await,
        }
    }
}
