// ABOUTME: Computed BMI result, health category and healthy weight range
// ABOUTME: Display helpers render the values exactly as the results screen shows them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WeightUnit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health category for a BMI value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 - 24.9
    Normal,
    /// BMI 25.0 - 29.9
    Overweight,
    /// BMI 30.0 and above
    Obese,
}

impl BmiCategory {
    /// All categories from lowest to highest band
    pub const ALL: [Self; 4] = [Self::Underweight, Self::Normal, Self::Overweight, Self::Obese];

    /// Category name as shown to users
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// BMI band covered by the category
    #[must_use]
    pub const fn range_label(self) -> &'static str {
        match self {
            Self::Underweight => "< 18.5",
            Self::Normal => "18.5 - 24.9",
            Self::Overweight => "25 - 29.9",
            Self::Obese => ">= 30",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the category guide
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct GuideEntry {
    /// Category described by the row
    pub category: BmiCategory,
    /// BMI band for the category
    pub range: &'static str,
}

impl fmt::Display for GuideEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12}{}", self.category.label(), self.range)
    }
}

/// Weight interval matching BMI 18.5 - 24.9 at a given height
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HealthyWeightRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Unit of both bounds
    pub unit: WeightUnit,
}

impl fmt::Display for HealthyWeightRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            WeightUnit::Kilograms => write!(f, "{:.0} - {:.0} kg", self.min, self.max),
            WeightUnit::Pounds => write!(f, "{:.1} - {:.1} lb", self.min, self.max),
        }
    }
}

/// Result of one BMI calculation; immutable once computed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub bmi: f64,
    /// Health category for `bmi`
    pub category: BmiCategory,
    /// Lower bound of the healthy weight range
    pub healthy_weight_min: f64,
    /// Upper bound of the healthy weight range
    pub healthy_weight_max: f64,
    /// Unit of the healthy weight range
    pub weight_range_unit: WeightUnit,
    /// Advice sentence for the category
    pub tip: String,
}

impl BmiResult {
    /// BMI with exactly one decimal, as persisted in history
    #[must_use]
    pub fn bmi_display(&self) -> String {
        format!("{:.1}", self.bmi)
    }

    /// One-line summary, e.g. `Your BMI: 22.5 - Normal`
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Your BMI: {} - {}", self.bmi_display(), self.category)
    }

    /// Healthy weight range as a value
    #[must_use]
    pub const fn healthy_weight_range(&self) -> HealthyWeightRange {
        HealthyWeightRange {
            min: self.healthy_weight_min,
            max: self.healthy_weight_max,
            unit: self.weight_range_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BmiResult {
        BmiResult {
            bmi: 22.5,
            category: BmiCategory::Normal,
            healthy_weight_min: 53.0,
            healthy_weight_max: 72.0,
            weight_range_unit: WeightUnit::Kilograms,
            tip: String::new(),
        }
    }

    #[test]
    fn test_summary() {
        assert_eq!(sample().summary(), "Your BMI: 22.5 - Normal");
    }

    #[test]
    fn test_whole_bmi_keeps_one_decimal() {
        let result = BmiResult {
            bmi: 25.0,
            ..sample()
        };
        assert_eq!(result.bmi_display(), "25.0");
    }

    #[test]
    fn test_range_display_per_unit() {
        assert_eq!(sample().healthy_weight_range().to_string(), "53 - 72 kg");
        let pounds = HealthyWeightRange {
            min: 117.9,
            max: 158.7,
            unit: WeightUnit::Pounds,
        };
        assert_eq!(pounds.to_string(), "117.9 - 158.7 lb");
    }
}
