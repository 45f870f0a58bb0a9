// ABOUTME: Core types and the BMI engine for the BMI tracker
// ABOUTME: Foundation crate with error handling, constants, models and calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # BMI Core
//!
//! Foundation crate for the BMI tracker. Everything in here is synchronous and
//! free of I/O so it can be shared by the history store, the CLI and tests.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion factors, BMI thresholds and storage keys
//! - **models**: Measurement input, BMI results and persisted history records
//! - **engine**: Unit normalisation, BMI computation, classification and advice

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`Measurement`, `BmiResult`, `HistoryRecord`)
pub mod models;

/// Pure BMI calculations
pub mod engine;
