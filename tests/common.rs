// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides logging setup, sample measurements and a failing storage backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, clippy::missing_errors_doc, clippy::must_use_candidate)]
//! Shared test utilities for `bmi_tracker`

use bmi_tracker::bmi_core::errors::{AppError, AppResult};
use bmi_tracker::bmi_core::models::HistoryRecord;
use bmi_tracker::storage::KeyValueStore;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// History record with fixed values
pub fn record(name: &str, bmi: &str, date: &str) -> HistoryRecord {
    HistoryRecord {
        name: name.to_owned(),
        bmi: bmi.to_owned(),
        date: date.to_owned(),
    }
}

/// Backend whose every operation fails
#[derive(Debug, Clone, Default)]
pub struct FailingStore;

#[async_trait::async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Err(AppError::storage("backend offline"))
    }

    async fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::storage("backend offline"))
    }

    async fn remove(&self, _key: &str) -> AppResult<()> {
        Err(AppError::storage("backend offline"))
    }
}
