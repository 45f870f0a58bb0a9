// ABOUTME: Background task re-reading the history log on a fixed interval
// ABOUTME: Publishes snapshots over a watch channel and stops when cancelled or dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::HistoryStore;
use crate::storage::KeyValueStore;
use bmi_core::constants::storage::DEFAULT_HISTORY_POLL_INTERVAL_SECS;
use bmi_core::models::HistoryRecord;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Periodic reader backing the history view
///
/// The first read happens immediately, then once per interval. Subscribers
/// are only woken when the log actually changed. The task is cancelled by
/// [`stop`](Self::stop) or when the poller is dropped, so a torn-down view
/// never leaves a timer running.
pub struct HistoryPoller {
    snapshot_rx: watch::Receiver<Vec<HistoryRecord>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl HistoryPoller {
    /// Start polling `history` every `interval`
    ///
    /// A zero interval falls back to the default of two seconds. Must be
    /// called from within a tokio runtime.
    pub fn spawn<S>(history: HistoryStore<S>, interval: Duration) -> Self
    where
        S: KeyValueStore + 'static,
    {
        let period = if interval.is_zero() {
            Duration::from_secs(DEFAULT_HISTORY_POLL_INTERVAL_SECS)
        } else {
            interval
        };

        let (snapshot_tx, snapshot_rx) = watch::channel(Vec::new());
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let records = history.read_all().await;
                        snapshot_tx.send_if_modified(|current| {
                            if *current == records {
                                false
                            } else {
                                *current = records;
                                true
                            }
                        });
                    }
                    // Fires on an explicit signal and when the sender is dropped
                    _ = shutdown_rx.recv() => {
                        debug!("History poller received shutdown signal");
                        break;
                    }
                }
            }
        });

        debug!(interval_ms = period.as_millis(), "Started history poller");

        Self {
            snapshot_rx,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Receiver notified whenever a refresh finds a different log
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<HistoryRecord>> {
        self.snapshot_rx.clone()
    }

    /// Most recent snapshot
    #[must_use]
    pub fn latest(&self) -> Vec<HistoryRecord> {
        self.snapshot_rx.borrow().clone()
    }

    /// Whether the background task is still running
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel the task and wait for it to exit
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            if let Err(e) = tx.try_send(()) {
                debug!(error = ?e, "History poller already stopped");
            }
        }
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                debug!(error = ?e, "History poller task ended abnormally");
            }
        }
    }
}

impl Drop for HistoryPoller {
    fn drop(&mut self) {
        // Signal background task to shutdown on drop
        if let Some(tx) = self.shutdown_tx.take() {
            if let Err(e) = tx.try_send(()) {
                debug!(error = ?e, "History poller shutdown signal send failed");
            }
        }
    }
}
