// ABOUTME: BMI classification into health categories with static advice per band
// ABOUTME: Also produces the category guide shown next to a result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::bmi::{NORMAL_MIN, OBESE_MIN, OVERWEIGHT_MIN};
use crate::models::{BmiCategory, GuideEntry};

/// Classify a BMI value
///
/// Bands are inclusive at the lower bound. Values between two displayed
/// bounds (e.g. 24.95) fall into the lower band, so the classification of a
/// one-decimal BMI always matches the guide.
#[must_use]
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

impl BmiCategory {
    /// Fixed advice sentence for the category
    #[must_use]
    pub const fn tip(self) -> &'static str {
        match self {
            Self::Underweight => {
                "Consider adding nutrient-dense meals and snacks, and talk to a healthcare provider about healthy weight gain."
            }
            Self::Normal => {
                "Great job! Keep up a balanced diet and regular physical activity to stay in this range."
            }
            Self::Overweight => {
                "Try increasing daily activity and watching portion sizes to move toward a healthier weight."
            }
            Self::Obese => {
                "Consider speaking with a healthcare provider about a personalised plan for diet, exercise and regular check-ups."
            }
        }
    }
}

/// Advice sentence for the band containing `bmi`
#[must_use]
pub fn tip_for(bmi: f64) -> &'static str {
    classify(bmi).tip()
}

/// Category guide, lowest band first
#[must_use]
pub fn guide() -> [GuideEntry; 4] {
    BmiCategory::ALL.map(|category| GuideEntry {
        category,
        range: category.range_label(),
    })
}
