// ABOUTME: Main library entry point for the BMI tracker
// ABOUTME: Wires the BMI engine to form validation, history storage and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # BMI Tracker
//!
//! Computes Body Mass Index from age, gender, height and weight, keeps an
//! append-only log of past results and shows a simple category guide.
//!
//! ## Architecture
//!
//! - **Engine** (`bmi-core`): unit normalisation, BMI, category, advice and
//!   healthy weight range. Pure and synchronous.
//! - **Storage**: async key-value capability with in-memory and file backends
//! - **History**: append-only log stored as one JSON array under `bmiData`,
//!   plus a poller that refreshes the history view every two seconds
//! - **Form**: raw input state and caller-side validation
//! - **Context**: application-wide theme flag and shared dependencies
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bmi_tracker::config::TrackerConfig;
//! use bmi_tracker::context::AppContext;
//! use bmi_tracker::storage::memory::InMemoryStore;
//! use bmi_tracker::bmi_core::models::{Gender, Measurement};
//!
//! # async fn example() -> bmi_tracker::bmi_core::errors::AppResult<()> {
//! let context = AppContext::new(TrackerConfig::default(), InMemoryStore::new());
//! let measurement = Measurement::metric("Ana", Gender::Female, 28, 170.0, 70.0);
//!
//! let result = context.calculate_and_record(&measurement).await?;
//! println!("{}", result.summary());
//!
//! let history = context.history().read_all().await;
//! assert_eq!(history.len(), 1);
//! # Ok(())
//! # }
//! ```

/// Re-exported engine crate
pub use bmi_core;

/// Configuration management
pub mod config;

/// Application context and theme state
pub mod context;

/// Input form state and validation
pub mod form;

/// Append-only history log and its poller
pub mod history;

/// Structured logging setup
pub mod logging;

/// Key-value storage capability and backends
pub mod storage;
