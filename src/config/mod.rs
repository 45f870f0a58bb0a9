// ABOUTME: Configuration module for storage, history refresh and form defaults
// ABOUTME: Settings are read from environment variables with typed defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based configuration
pub mod environment;

pub use environment::{StorageBackend, StorageConfig, TrackerConfig};
