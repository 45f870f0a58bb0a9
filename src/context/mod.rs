// ABOUTME: Application-level context passed to every screen-like consumer
// ABOUTME: Owns configuration, theme state and the history store for one process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application context
//!
//! One [`AppContext`] is created at startup and handed by reference to the
//! components that need it; there are no process-wide globals.
//!
//! - `ThemeState`: shared light/dark flag
//! - `HistoryStore`: persisted calculation log
//! - `TrackerConfig`: polling interval and form defaults

/// Shared theme toggle
pub mod theme;

pub use theme::ThemeState;

use crate::config::TrackerConfig;
use crate::form::MeasurementForm;
use crate::history::{HistoryPoller, HistoryStore};
use crate::storage::factory::Storage;
use crate::storage::KeyValueStore;
use bmi_core::engine;
use bmi_core::errors::AppResult;
use bmi_core::models::{BmiResult, HistoryRecord, Measurement};
use std::sync::Arc;
use tracing::{info, warn};

/// Dependencies shared by the input, results and history views
#[derive(Clone)]
pub struct AppContext<S = Storage> {
    config: Arc<TrackerConfig>,
    theme: ThemeState,
    history: HistoryStore<S>,
}

impl AppContext<Storage> {
    /// Build the context with the backend named in `config`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be opened
    pub async fn from_config(config: TrackerConfig) -> AppResult<Self> {
        let storage = Storage::from_config(&config.storage).await?;
        Ok(Self::new(config, storage))
    }
}

impl<S: KeyValueStore + 'static> AppContext<S> {
    /// Build the context around an existing storage backend
    pub fn new(config: TrackerConfig, store: S) -> Self {
        let theme = ThemeState::new(config.dark_theme);
        Self {
            config: Arc::new(config),
            theme,
            history: HistoryStore::new(store),
        }
    }

    /// Loaded configuration
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Theme flag handle
    #[must_use]
    pub const fn theme(&self) -> &ThemeState {
        &self.theme
    }

    /// History log
    #[must_use]
    pub const fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    /// Empty input form with the configured default units
    #[must_use]
    pub fn new_form(&self) -> MeasurementForm {
        MeasurementForm::with_units(
            self.config.default_height_unit,
            self.config.default_weight_unit,
        )
    }

    /// Compute a result and append it to the history log
    ///
    /// A failed append is logged and otherwise ignored: the result is still
    /// returned, only the history entry is missing.
    ///
    /// # Errors
    ///
    /// Returns the engine's validation error if the measurement cannot
    /// produce a BMI. Nothing is written in that case.
    pub async fn calculate_and_record(&self, measurement: &Measurement) -> AppResult<BmiResult> {
        let result = engine::evaluate(measurement)?;
        let record = HistoryRecord::dated_today(measurement.name.clone(), &result);

        match self.history.append(record).await {
            Ok(()) => info!(bmi = %result.bmi_display(), category = %result.category, "Recorded BMI"),
            Err(e) => warn!(error = %e, "BMI result was not saved to history"),
        }
        Ok(result)
    }

    /// Start refreshing the history view at the configured interval
    #[must_use]
    pub fn watch_history(&self) -> HistoryPoller {
        HistoryPoller::spawn(self.history.clone(), self.config.history_poll_interval)
    }
}
