// ABOUTME: Height and weight normalisation plus the BMI formula
// ABOUTME: Rounds BMI half away from zero to one decimal place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::{CM_PER_METER, KG_PER_LB, METERS_PER_FOOT, METERS_PER_INCH};
use crate::errors::{AppError, AppResult};
use crate::models::{HeightUnit, WeightUnit};

/// Convert an entered height to meters
///
/// Centimeter heights read `height_value`; feet/inch heights read `feet` and
/// `inches` and ignore `height_value`.
///
/// # Errors
///
/// Returns `MissingRequiredField` if the sub-fields for `unit` are absent,
/// `InvalidFormat` if any of them is not finite and `ValueOutOfRange` if any
/// of them is negative.
pub fn normalize_height(
    height_value: Option<f64>,
    unit: HeightUnit,
    feet: Option<f64>,
    inches: Option<f64>,
) -> AppResult<f64> {
    match unit {
        HeightUnit::Centimeters => {
            let centimeters = require("height", height_value)?;
            Ok(centimeters / CM_PER_METER)
        }
        HeightUnit::FeetInches => {
            let missing: Vec<&str> = [("feet", feet), ("inches", inches)]
                .iter()
                .filter(|(_, value)| value.is_none())
                .map(|(field, _)| *field)
                .collect();
            if !missing.is_empty() {
                return Err(AppError::missing_fields(&missing));
            }
            let feet = require("feet", feet)?;
            let inches = require("inches", inches)?;
            Ok(feet.mul_add(METERS_PER_FOOT, inches * METERS_PER_INCH))
        }
    }
}

fn require(field: &str, value: Option<f64>) -> AppResult<f64> {
    let value = value.ok_or_else(|| AppError::missing_fields(&[field]))?;
    if !value.is_finite() {
        return Err(AppError::invalid_format(&[field]));
    }
    if value < 0.0 {
        return Err(AppError::out_of_range(format!(
            "{field} cannot be negative, got {value}"
        )));
    }
    Ok(value)
}

/// Convert an entered weight to kilograms
#[must_use]
pub fn normalize_weight(weight_value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilograms => weight_value,
        WeightUnit::Pounds => weight_value * KG_PER_LB,
    }
}

/// Compute BMI from meters and kilograms, rounded to one decimal
///
/// # Errors
///
/// Returns `ValueOutOfRange` if the height is zero or negative or the
/// weight is negative, and `InvalidInput` if the quotient is not finite. A
/// zero weight is accepted and yields a BMI of 0.0.
pub fn compute_bmi(meters: f64, kilograms: f64) -> AppResult<f64> {
    if meters.is_nan() || meters <= 0.0 {
        return Err(AppError::out_of_range(format!(
            "Height must be greater than zero, got {meters} m"
        )));
    }
    if kilograms.is_nan() || kilograms < 0.0 {
        return Err(AppError::out_of_range(format!(
            "Weight cannot be negative, got {kilograms} kg"
        )));
    }

    let bmi = kilograms / (meters * meters);
    if !bmi.is_finite() {
        return Err(AppError::invalid_input(format!(
            "BMI is not finite for {meters} m and {kilograms} kg"
        )));
    }

    Ok(round_one_decimal(bmi))
}

/// Round to one decimal place the way fixed-point display does
///
/// Rounding works on the exact binary value, so `24.95` (stored as
/// `24.9499...`) becomes `24.9`. Exact halves such as `24.25` go away from
/// zero.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    if is_exact_half(value) {
        // value * 10 is exact here, so round() sees the true tie
        return (value * 10.0).round() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Whether `value` lies exactly halfway between two one-decimal numbers
///
/// Such values are `j / 4` for odd `j`; scaling by 4 is exact.
#[allow(clippy::float_cmp)]
fn is_exact_half(value: f64) -> bool {
    ((value * 4.0) % 2.0).abs() == 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_centimeters_divide_by_hundred() {
        let meters = normalize_height(Some(170.0), HeightUnit::Centimeters, None, None).unwrap();
        assert!(close(meters, 1.70));
    }

    #[test]
    fn test_feet_and_inches() {
        let meters =
            normalize_height(Some(5.0), HeightUnit::FeetInches, Some(5.0), Some(10.0)).unwrap();
        assert!(close(meters, 1.778));
    }

    #[test]
    fn test_feet_inches_ignores_height_value() {
        let meters =
            normalize_height(None, HeightUnit::FeetInches, Some(6.0), Some(0.0)).unwrap();
        assert!(close(meters, 1.8288));
    }

    #[test]
    fn test_missing_inches_is_reported() {
        let error = normalize_height(Some(5.0), HeightUnit::FeetInches, Some(5.0), None)
            .unwrap_err();
        assert!(error.is_validation());
        assert!(error.message.contains("inches"));
    }

    #[test]
    fn test_missing_centimeters_is_reported() {
        let error = normalize_height(None, HeightUnit::Centimeters, None, None).unwrap_err();
        assert!(error.is_validation());
    }

    #[test]
    fn test_non_finite_height_is_rejected() {
        let error =
            normalize_height(Some(f64::NAN), HeightUnit::Centimeters, None, None).unwrap_err();
        assert!(error.is_validation());
    }

    #[test]
    fn test_pounds_to_kilograms() {
        assert!((normalize_weight(154.324, WeightUnit::Pounds) - 70.0).abs() < 0.01);
        assert!(close(normalize_weight(70.0, WeightUnit::Kilograms), 70.0));
    }

    #[test]
    fn test_compute_bmi_rounds_to_one_decimal() {
        assert!(close(compute_bmi(1.70, 70.0).unwrap(), 24.2));
    }

    #[test]
    fn test_zero_height_never_yields_infinity() {
        let error = compute_bmi(0.0, 70.0).unwrap_err();
        assert!(error.is_validation());
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert!(close(round_one_decimal(24.25), 24.3));
        assert!(close(round_one_decimal(24.75), 24.8));
        assert!(close(round_one_decimal(24.24), 24.2));
        assert!(close(round_one_decimal(0.25), 0.3));
        assert!(close(round_one_decimal(-0.25), -0.3));
    }

    #[test]
    fn test_round_uses_stored_value_below_half() {
        // Stored just below the half, so fixed-point display rounds down
        assert!(close(round_one_decimal(24.95), 24.9));
        assert!(close(round_one_decimal(18.45), 18.4));
        assert!(close(round_one_decimal(29.95), 29.9));
        assert!(close(round_one_decimal(24.96), 25.0));
    }

    #[test]
    fn test_round_keeps_whole_numbers() {
        assert!(close(round_one_decimal(30.0), 30.0));
        assert!(close(round_one_decimal(0.5), 0.5));
        assert!(close(round_one_decimal(0.0), 0.0));
    }

    #[test]
    fn test_zero_weight_is_zero_bmi() {
        assert!(close(compute_bmi(1.70, 0.0).unwrap(), 0.0));
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let error = compute_bmi(1.70, -1.0).unwrap_err();
        assert!(error.is_validation());
    }
}
