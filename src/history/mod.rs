// ABOUTME: Append-only history log persisted as a JSON array under one storage key
// ABOUTME: Supports append, fail-soft read of the whole log and clear-all
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Periodic refresh of the history view
pub mod poller;

pub use poller::HistoryPoller;

use crate::storage::KeyValueStore;
use bmi_core::constants::storage::HISTORY_KEY;
use bmi_core::errors::{AppError, AppResult};
use bmi_core::models::HistoryRecord;
use tracing::{debug, info, warn};

/// Durable, append-only log of past results
///
/// The log only grows by [`append`](Self::append) and only shrinks through
/// [`clear_all`](Self::clear_all); records are never edited or removed one at
/// a time. Appends are a read-modify-write against the backend and assume a
/// single writer.
#[derive(Debug, Clone)]
pub struct HistoryStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// History store using the standard `bmiData` key
    pub fn new(store: S) -> Self {
        Self::with_key(store, HISTORY_KEY)
    }

    /// History store using a custom key
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key holding the serialized log
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append one record after all existing ones
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails, or a serialization error
    /// if the stored log is malformed. A malformed log is left untouched
    /// rather than overwritten.
    pub async fn append(&self, record: HistoryRecord) -> AppResult<()> {
        let mut records = match self.store.get(&self.key).await? {
            Some(raw) => decode(&raw)?,
            None => Vec::new(),
        };
        records.push(record);

        let encoded = serde_json::to_string(&records)?;
        self.store.set(&self.key, &encoded).await?;
        debug!(key = %self.key, total = records.len(), "Appended history record");
        Ok(())
    }

    /// Every record in insertion order
    ///
    /// Never fails: an absent key, a backend error or malformed data all
    /// yield an empty log, and the latter two are logged.
    pub async fn read_all(&self) -> Vec<HistoryRecord> {
        match self.store.get(&self.key).await {
            Ok(Some(raw)) => decode(&raw).unwrap_or_else(|e| {
                warn!(key = %self.key, error = %e, "Ignoring malformed history data");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read history");
                Vec::new()
            }
        }
    }

    /// Remove the whole log
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot delete the key
    pub async fn clear_all(&self) -> AppResult<()> {
        self.store.remove(&self.key).await?;
        info!(key = %self.key, "Cleared history");
        Ok(())
    }
}

fn decode(raw: &str) -> AppResult<Vec<HistoryRecord>> {
    serde_json::from_str(raw).map_err(|e| {
        AppError::serialization(format!("History log is not a valid record list: {e}"))
            .with_source(e)
    })
}
