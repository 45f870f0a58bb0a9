// ABOUTME: Persisted history record written once per successful calculation
// ABOUTME: Field names and formats match the stored JSON array exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::BmiResult;
use crate::constants::storage::HISTORY_DATE_FORMAT;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One past calculation as stored in the history log
///
/// Records are never edited after being written. The JSON form is
/// `{"name": "...", "bmi": "24.2", "date": "18/10/2026"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryRecord {
    /// Name entered on the form
    pub name: String,
    /// BMI formatted with one decimal
    pub bmi: String,
    /// Calculation date, day/month/year
    pub date: String,
}

impl HistoryRecord {
    /// Build a record for `result` on the given date
    pub fn new(name: impl Into<String>, result: &BmiResult, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            bmi: result.bmi_display(),
            date: date.format(HISTORY_DATE_FORMAT).to_string(),
        }
    }

    /// Build a record dated with the local calendar day
    pub fn dated_today(name: impl Into<String>, result: &BmiResult) -> Self {
        Self::new(name, result, Local::now().date_naive())
    }

    /// Table cells in display order: date, BMI, name
    #[must_use]
    pub fn display_row(&self) -> [&str; 3] {
        [&self.date, &self.bmi, &self.name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BmiCategory, WeightUnit};

    #[test]
    fn test_record_formats_bmi_and_date() {
        let result = BmiResult {
            bmi: 24.2,
            category: BmiCategory::Normal,
            healthy_weight_min: 53.0,
            healthy_weight_max: 72.0,
            weight_range_unit: WeightUnit::Kilograms,
            tip: String::new(),
        };
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let record = HistoryRecord::new("Alex", &result, date);

        assert_eq!(record.bmi, "24.2");
        assert_eq!(record.date, "07/03/2026");

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Alex","bmi":"24.2","date":"07/03/2026"}"#);
    }
}
