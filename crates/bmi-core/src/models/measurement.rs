// ABOUTME: Measurement input model with gender and unit enums
// ABOUTME: String parsing follows the unit labels shown by the input form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender selected on the input form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Unit the height was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum HeightUnit {
    /// Single value in centimeters
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    /// Two values: feet and inches
    #[serde(rename = "ft-in")]
    FeetInches,
}

impl HeightUnit {
    /// Label used in configuration and on the form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::FeetInches => "ft-in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" => Ok(Self::Centimeters),
            "ft-in" | "ft" | "in" => Ok(Self::FeetInches),
            other => Err(AppError::invalid_input(format!(
                "Unknown height unit: '{other}'. Valid options: cm, ft-in"
            ))),
        }
    }
}

/// Unit the weight was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WeightUnit {
    /// Kilograms
    #[serde(rename = "kg")]
    Kilograms,
    /// Pounds
    #[default]
    #[serde(rename = "lb")]
    Pounds,
}

impl WeightUnit {
    /// Short unit label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Pounds => "lb",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Ok(Self::Kilograms),
            "lb" | "lbs" => Ok(Self::Pounds),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight unit: '{other}'. Valid options: kg, lb"
            ))),
        }
    }
}

/// Validated user measurement handed to the engine
///
/// For [`HeightUnit::Centimeters`] only `height_value` is read. For
/// [`HeightUnit::FeetInches`] the engine reads `height_feet` and
/// `height_inches`; `height_value` mirrors the feet entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Display name stored with the history record
    pub name: String,
    /// Selected gender
    pub gender: Gender,
    /// Age in whole years
    pub age_years: u16,
    /// Height in the selected unit
    pub height_value: f64,
    /// Unit the height was entered in
    pub height_unit: HeightUnit,
    /// Feet component for imperial heights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_feet: Option<f64>,
    /// Inches component for imperial heights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_inches: Option<f64>,
    /// Weight in the selected unit
    pub weight_value: f64,
    /// Unit the weight was entered in
    pub weight_unit: WeightUnit,
}

impl Measurement {
    /// Metric measurement (centimeters and kilograms)
    pub fn metric(
        name: impl Into<String>,
        gender: Gender,
        age_years: u16,
        height_cm: f64,
        weight_kg: f64,
    ) -> Self {
        Self {
            name: name.into(),
            gender,
            age_years,
            height_value: height_cm,
            height_unit: HeightUnit::Centimeters,
            height_feet: None,
            height_inches: None,
            weight_value: weight_kg,
            weight_unit: WeightUnit::Kilograms,
        }
    }

    /// Imperial measurement (feet, inches and pounds)
    pub fn imperial(
        name: impl Into<String>,
        gender: Gender,
        age_years: u16,
        feet: f64,
        inches: f64,
        weight_lb: f64,
    ) -> Self {
        Self {
            name: name.into(),
            gender,
            age_years,
            height_value: feet,
            height_unit: HeightUnit::FeetInches,
            height_feet: Some(feet),
            height_inches: Some(inches),
            weight_value: weight_lb,
            weight_unit: WeightUnit::Pounds,
        }
    }
}
