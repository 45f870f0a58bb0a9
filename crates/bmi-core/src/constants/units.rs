// ABOUTME: Unit conversion constants for height and weight measurements
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// Meters per foot
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Meters per inch
pub const METERS_PER_INCH: f64 = 0.0254;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453_592;

/// Pounds per kilogram (used for the healthy weight range)
pub const LB_PER_KG: f64 = 2.204_62;
