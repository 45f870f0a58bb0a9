// ABOUTME: Integration tests for the file-backed key-value store
// ABOUTME: Checks persistence across instances, removal and the on-disk history format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use anyhow::Result;
use bmi_tracker::config::{StorageBackend, StorageConfig};
use bmi_tracker::history::HistoryStore;
use bmi_tracker::storage::factory::Storage;
use bmi_tracker::storage::file::FileStore;
use bmi_tracker::storage::KeyValueStore;
use common::{init_test_logging, record};
use tempfile::TempDir;

#[tokio::test]
async fn test_absent_key_is_none() -> Result<()> {
    init_test_logging();
    let dir = TempDir::new()?;
    let store = FileStore::open(dir.path()).await?;

    assert_eq!(store.get("bmiData").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_open_creates_nested_directory() -> Result<()> {
    init_test_logging();
    let dir = TempDir::new()?;
    let nested = dir.path().join("a").join("b");

    let store = FileStore::open(&nested).await?;

    assert!(nested.is_dir());
    assert_eq!(store.root(), nested.as_path());
    Ok(())
}

#[tokio::test]
async fn test_value_survives_reopen() -> Result<()> {
    init_test_logging();
    let dir = TempDir::new()?;

    {
        let store = FileStore::open(dir.path()).await?;
        store.set("bmiData", "[]").await?;
        store.set("bmiData", "[1]").await?;
    }

    let reopened = FileStore::open(dir.path()).await?;
    assert_eq!(reopened.get("bmiData").await?.as_deref(), Some("[1]"));
    Ok(())
}

#[tokio::test]
async fn test_remove_is_idempotent() -> Result<()> {
    init_test_logging();
    let dir = TempDir::new()?;
    let store = FileStore::open(dir.path()).await?;

    store.set("bmiData", "[]").await?;
    store.remove("bmiData").await?;
    store.remove("bmiData").await?;

    assert_eq!(store.get("bmiData").await?, None);
    assert!(!dir.path().join("bmiData").exists());
    Ok(())
}

#[tokio::test]
async fn test_history_file_holds_json_array() -> Result<()> {
    init_test_logging();
    let dir = TempDir::new()?;
    let history = HistoryStore::new(FileStore::open(dir.path()).await?);

    history.append(record("Alex", "24.2", "07/03/2026")).await?;
    history.append(record("Sam", "31.0", "08/03/2026")).await?;

    let raw = std::fs::read_to_string(dir.path().join("bmiData"))?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(
        value,
        serde_json::json!([
            { "name": "Alex", "bmi": "24.2", "date": "07/03/2026" },
            { "name": "Sam", "bmi": "31.0", "date": "08/03/2026" }
        ])
    );
    Ok(())
}

#[tokio::test]
async fn test_factory_selects_backend() -> Result<()> {
    init_test_logging();
    let dir = TempDir::new()?;

    let file = Storage::from_config(&StorageConfig {
        backend: StorageBackend::File,
        data_dir: dir.path().join("data"),
    })
    .await?;
    assert!(matches!(file, Storage::File(_)));
    file.set("bmiData", "[]").await?;
    assert!(dir.path().join("data").join("bmiData").exists());

    let memory = Storage::from_config(&StorageConfig {
        backend: StorageBackend::Memory,
        data_dir: dir.path().join("unused"),
    })
    .await?;
    assert!(matches!(memory, Storage::Memory(_)));
    assert!(!dir.path().join("unused").exists());
    Ok(())
}
