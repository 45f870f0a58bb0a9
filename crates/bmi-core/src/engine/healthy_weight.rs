// ABOUTME: Healthy weight range for a height, reported in the unit system of the height entry
// ABOUTME: Feet/inch heights yield pounds, centimeter heights yield whole kilograms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::round_one_decimal;
use crate::constants::bmi::{HEALTHY_BMI_MAX, HEALTHY_BMI_MIN};
use crate::constants::units::LB_PER_KG;
use crate::models::{HealthyWeightRange, HeightUnit, WeightUnit};

/// Weight range matching BMI 18.5 - 24.9 at `height_meters`
///
/// The reporting unit follows how the *height* was entered, not the weight:
/// feet/inches report pounds with one decimal, centimeters report kilograms
/// rounded to whole numbers.
#[must_use]
pub fn healthy_weight_range(height_meters: f64, source_unit: HeightUnit) -> HealthyWeightRange {
    let squared = height_meters * height_meters;
    let min_kg = HEALTHY_BMI_MIN * squared;
    let max_kg = HEALTHY_BMI_MAX * squared;

    match source_unit {
        HeightUnit::FeetInches => HealthyWeightRange {
            min: round_one_decimal(min_kg * LB_PER_KG),
            max: round_one_decimal(max_kg * LB_PER_KG),
            unit: WeightUnit::Pounds,
        },
        HeightUnit::Centimeters => HealthyWeightRange {
            min: min_kg.round(),
            max: max_kg.round(),
            unit: WeightUnit::Kilograms,
        },
    }
}
