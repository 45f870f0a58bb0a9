// ABOUTME: Application constants organized by domain for the BMI tracker
// ABOUTME: Unit conversions, BMI category thresholds, input limits and storage settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion factors
pub mod units;

/// BMI category boundaries and healthy range
pub mod bmi;

/// Input validation limits
pub mod limits {
    /// Longest age string accepted by the input form
    pub const MAX_AGE_DIGITS: usize = 3;
}

/// Persisted history settings
pub mod storage {
    /// Key under which the serialized history log is stored
    pub const HISTORY_KEY: &str = "bmiData";

    /// Day/month/year date format used for history records
    pub const HISTORY_DATE_FORMAT: &str = "%d/%m/%Y";

    /// Default refresh interval for the history view
    pub const DEFAULT_HISTORY_POLL_INTERVAL_SECS: u64 = 2;

    /// Directory name used under the platform data directory
    pub const DATA_DIR_NAME: &str = "bmi-tracker";
}
