// ABOUTME: BMI category thresholds based on the WHO adult classification
// ABOUTME: Boundaries are expressed on the one-decimal BMI scale shown to users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Category boundaries on the one-decimal BMI scale.
//!
//! | range            | category    |
//! |------------------|-------------|
//! | < 18.5           | Underweight |
//! | 18.5 - 24.9      | Normal      |
//! | 25.0 - 29.9      | Overweight  |
//! | >= 30.0          | Obese       |

/// Lowest BMI classified as normal
pub const NORMAL_MIN: f64 = 18.5;

/// Highest BMI classified as normal
pub const NORMAL_MAX: f64 = 24.9;

/// Lowest BMI classified as overweight
pub const OVERWEIGHT_MIN: f64 = 25.0;

/// Highest BMI classified as overweight
pub const OVERWEIGHT_MAX: f64 = 29.9;

/// Lowest BMI classified as obese
pub const OBESE_MIN: f64 = 30.0;

/// Lower bound of the healthy weight range, as a BMI
pub const HEALTHY_BMI_MIN: f64 = NORMAL_MIN;

/// Upper bound of the healthy weight range, as a BMI
pub const HEALTHY_BMI_MAX: f64 = NORMAL_MAX;
