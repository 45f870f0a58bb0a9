// ABOUTME: BMI engine turning a validated measurement into a BmiResult
// ABOUTME: Pure synchronous transformations with no side effects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! BMI engine
//!
//! The engine only checks that its inputs can produce a finite BMI. Prompting
//! the user about empty fields happens earlier, in the input form.

/// Height/weight normalisation and the BMI formula
mod conversion;
/// Category classification, advice and guide
mod category;
/// Healthy weight range for a height
mod healthy_weight;

pub use category::{classify, guide, tip_for};
pub use conversion::{compute_bmi, normalize_height, normalize_weight, round_one_decimal};
pub use healthy_weight::healthy_weight_range;

use crate::errors::AppResult;
use crate::models::{BmiResult, Measurement};
use tracing::debug;

/// Compute the full result for a measurement
///
/// # Errors
///
/// Returns a validation error when the height sub-fields required by the
/// selected unit are missing, or when height or weight would make the BMI
/// zero, negative or non-finite.
pub fn evaluate(measurement: &Measurement) -> AppResult<BmiResult> {
    let meters = normalize_height(
        Some(measurement.height_value),
        measurement.height_unit,
        measurement.height_feet,
        measurement.height_inches,
    )?;
    let kilograms = normalize_weight(measurement.weight_value, measurement.weight_unit);
    let bmi = compute_bmi(meters, kilograms)?;
    let category = classify(bmi);
    let range = healthy_weight_range(meters, measurement.height_unit);

    debug!(
        bmi,
        category = %category,
        height_unit = %measurement.height_unit,
        weight_unit = %measurement.weight_unit,
        "Computed BMI"
    );

    Ok(BmiResult {
        bmi,
        category,
        healthy_weight_min: range.min,
        healthy_weight_max: range.max,
        weight_range_unit: range.unit,
        tip: tip_for(bmi).to_owned(),
    })
}
