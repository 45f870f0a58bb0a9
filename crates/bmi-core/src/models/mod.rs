// ABOUTME: Core data models for BMI measurements, results and history records
// ABOUTME: Re-exports measurement, result and history types from submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Measurement input, genders and units
mod measurement;
/// Computed BMI result and categories
mod result;
/// Persisted history record
mod history;

pub use history::HistoryRecord;
pub use measurement::{Gender, HeightUnit, Measurement, WeightUnit};
pub use result::{BmiCategory, BmiResult, GuideEntry, HealthyWeightRange};
