// ABOUTME: Input form state holding raw field text and unit selections
// ABOUTME: Validates every field at once and produces a Measurement for the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bmi_core::constants::limits::MAX_AGE_DIGITS;
use bmi_core::errors::{AppError, AppResult};
use bmi_core::models::{Gender, HeightUnit, Measurement, WeightUnit};

/// Raw state of the measurement input form
///
/// Numeric fields hold whatever the user typed. In feet/inch mode `height`
/// holds the feet and `height_inches` the inches; in centimeter mode
/// `height_inches` is unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementForm {
    /// Name stored with the history record
    pub name: String,
    /// Selected gender, `None` until one is picked
    pub gender: Option<Gender>,
    /// Age text
    pub age: String,
    /// Height text (centimeters or feet)
    pub height: String,
    /// Inches text, feet/inch mode only
    pub height_inches: String,
    /// Weight text
    pub weight: String,
    height_unit: HeightUnit,
    /// Selected weight unit
    pub weight_unit: WeightUnit,
}

impl Default for MeasurementForm {
    fn default() -> Self {
        Self::with_units(HeightUnit::Centimeters, WeightUnit::Pounds)
    }
}

impl MeasurementForm {
    /// Empty form with the given unit selections
    #[must_use]
    pub const fn with_units(height_unit: HeightUnit, weight_unit: WeightUnit) -> Self {
        Self {
            name: String::new(),
            gender: None,
            age: String::new(),
            height: String::new(),
            height_inches: String::new(),
            weight: String::new(),
            height_unit,
            weight_unit,
        }
    }

    /// Currently selected height unit
    #[must_use]
    pub const fn height_unit(&self) -> HeightUnit {
        self.height_unit
    }

    /// Change the height unit; switching to centimeters clears both height fields
    pub fn set_height_unit(&mut self, unit: HeightUnit) {
        self.height_unit = unit;
        if unit == HeightUnit::Centimeters {
            self.height.clear();
            self.height_inches.clear();
        }
    }

    /// Clear the numeric fields and restore the feet/inch and pound units
    ///
    /// Name and gender are kept.
    pub fn reset(&mut self) {
        self.age.clear();
        self.height.clear();
        self.height_inches.clear();
        self.weight.clear();
        self.height_unit = HeightUnit::FeetInches;
        self.weight_unit = WeightUnit::Pounds;
    }

    /// Check every field and build a [`Measurement`]
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming every empty field, or
    /// `InvalidFormat` naming every field that is not a valid number. Nothing
    /// should be calculated until this succeeds.
    pub fn validate(&self) -> AppResult<Measurement> {
        let feet_inches = self.height_unit == HeightUnit::FeetInches;

        let mut missing = Vec::new();
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.age.trim().is_empty() {
            missing.push("age");
        }
        if self.height.trim().is_empty() {
            missing.push(if feet_inches { "feet" } else { "height" });
        }
        if feet_inches && self.height_inches.trim().is_empty() {
            missing.push("inches");
        }
        if self.weight.trim().is_empty() {
            missing.push("weight");
        }

        let gender = match self.gender {
            Some(gender) if missing.is_empty() => gender,
            _ => return Err(AppError::missing_fields(&missing)),
        };

        let mut invalid = Vec::new();
        let age_years = parse_age(&self.age).unwrap_or_else(|| {
            invalid.push("age");
            0
        });
        let height_value = parse_number(&self.height).unwrap_or_else(|| {
            invalid.push(if feet_inches { "feet" } else { "height" });
            0.0
        });
        let height_inches = if feet_inches {
            Some(parse_number(&self.height_inches).unwrap_or_else(|| {
                invalid.push("inches");
                0.0
            }))
        } else {
            None
        };
        let weight_value = parse_number(&self.weight).unwrap_or_else(|| {
            invalid.push("weight");
            0.0
        });

        if !invalid.is_empty() {
            return Err(AppError::invalid_format(&invalid));
        }

        Ok(Measurement {
            name: self.name.trim().to_owned(),
            gender,
            age_years,
            height_value,
            height_unit: self.height_unit,
            height_feet: feet_inches.then_some(height_value),
            height_inches,
            weight_value,
            weight_unit: self.weight_unit,
        })
    }
}

fn parse_age(raw: &str) -> Option<u16> {
    let trimmed = raw.trim();
    if trimmed.len() > MAX_AGE_DIGITS || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}
