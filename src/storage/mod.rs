// ABOUTME: Key-value storage abstraction used for the persisted history log
// ABOUTME: Pluggable backends (in-memory, file) behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Backend selection from configuration
pub mod factory;
/// File-per-key storage in a data directory
pub mod file;
/// In-memory storage for tests and ephemeral runs
pub mod memory;

use bmi_core::errors::AppResult;

/// String-keyed asynchronous storage capability
///
/// The history store receives an implementation of this trait instead of
/// reaching for a global, so tests can substitute [`memory::InMemoryStore`].
/// Implementations make no promise about concurrent writers: a
/// read-modify-write performed by two callers at once may lose one write.
///
/// # Examples
///
/// ```rust,no_run
/// use bmi_tracker::storage::{memory::InMemoryStore, KeyValueStore};
/// # async fn example() -> bmi_tracker::bmi_core::errors::AppResult<()> {
/// let store = InMemoryStore::new();
/// store.set("greeting", "hello").await?;
/// assert_eq!(store.get("greeting").await?, Some("hello".to_owned()));
/// store.remove("greeting").await?;
/// assert_eq!(store.get("greeting").await?, None);
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync + Clone {
    /// Read the value stored under `key`, `None` if absent
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`; removing an absent key succeeds
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be modified
    async fn remove(&self, key: &str) -> AppResult<()>;
}
