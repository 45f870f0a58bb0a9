// ABOUTME: Integration tests for input form validation and unit switching
// ABOUTME: Drives the form into the engine the way the calculate command does
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use bmi_tracker::bmi_core::engine::evaluate;
use bmi_tracker::bmi_core::errors::ErrorCode;
use bmi_tracker::bmi_core::models::{BmiCategory, Gender, HeightUnit, WeightUnit};
use bmi_tracker::form::MeasurementForm;

#[test]
fn test_empty_form_lists_every_missing_field() {
    let mut form = MeasurementForm::default();
    form.set_height_unit(HeightUnit::FeetInches);

    let error = form.validate().unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(
        error.message,
        "Please fill in: gender, age, feet, inches, weight"
    );
}

#[test]
fn test_name_is_optional() -> Result<()> {
    let mut form = MeasurementForm::default();
    form.gender = Some(Gender::Male);
    form.age = "40".to_owned();
    form.height = "180".to_owned();
    form.weight = "80".to_owned();
    form.weight_unit = WeightUnit::Kilograms;

    let measurement = form.validate()?;
    assert_eq!(measurement.name, "");
    Ok(())
}

#[test]
fn test_non_numeric_fields_are_named() {
    let mut form = MeasurementForm::default();
    form.gender = Some(Gender::Female);
    form.age = "twenty".to_owned();
    form.height = "170".to_owned();
    form.weight = "abc".to_owned();

    let error = form.validate().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert_eq!(error.message, "Please enter valid numbers for: age, weight");
}

#[test]
fn test_switching_to_centimeters_clears_height() {
    let mut form = MeasurementForm::default();
    form.set_height_unit(HeightUnit::FeetInches);
    form.height = "5".to_owned();
    form.height_inches = "10".to_owned();
    form.weight = "180".to_owned();

    form.set_height_unit(HeightUnit::Centimeters);

    assert_eq!(form.height_unit(), HeightUnit::Centimeters);
    assert!(form.height.is_empty());
    assert!(form.height_inches.is_empty());
    assert_eq!(form.weight, "180");
}

#[test]
fn test_reset_keeps_identity() {
    let mut form = MeasurementForm::default();
    form.name = "Ana".to_owned();
    form.gender = Some(Gender::Female);
    form.age = "28".to_owned();
    form.height = "170".to_owned();
    form.weight = "70".to_owned();
    form.weight_unit = WeightUnit::Kilograms;

    form.reset();

    assert_eq!(form.name, "Ana");
    assert_eq!(form.gender, Some(Gender::Female));
    assert!(form.age.is_empty());
    assert!(form.height.is_empty());
    assert!(form.weight.is_empty());
    assert_eq!(form.height_unit(), HeightUnit::FeetInches);
    assert_eq!(form.weight_unit, WeightUnit::Pounds);
}

#[test]
fn test_imperial_form_feeds_engine() -> Result<()> {
    let mut form = MeasurementForm::with_units(HeightUnit::FeetInches, WeightUnit::Pounds);
    form.gender = Some(Gender::Male);
    form.age = "40".to_owned();
    form.height = "5".to_owned();
    form.height_inches = "10".to_owned();
    form.weight = "200".to_owned();

    let measurement = form.validate()?;
    assert_eq!(measurement.height_feet, Some(5.0));
    assert_eq!(measurement.height_inches, Some(10.0));

    let result = evaluate(&measurement)?;
    assert!((result.bmi - 28.7).abs() < 1e-9);
    assert_eq!(result.category, BmiCategory::Overweight);
    assert_eq!(result.weight_range_unit, WeightUnit::Pounds);
    Ok(())
}

#[test]
fn test_zero_height_passes_form_but_not_engine() -> Result<()> {
    let mut form = MeasurementForm::default();
    form.gender = Some(Gender::Male);
    form.age = "40".to_owned();
    form.height = "0".to_owned();
    form.weight = "80".to_owned();

    let measurement = form.validate()?;
    let error = evaluate(&measurement).unwrap_err();
    assert!(error.is_validation());
    Ok(())
}
