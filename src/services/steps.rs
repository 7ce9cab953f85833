// ABOUTME: Step counting from the device sensor with write-back to today's stored count
// ABOUTME: Live tracker task recounts midnight-to-now on every sensor update until shut down
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::daily_store::{persist_or_log, DailyKeyStore};
use crate::constants::messages::STEP_COUNTER_UNAVAILABLE;
use crate::errors::{AppError, AppResult};
use crate::models::{Metric, StorageKey};
use crate::sensors::StepSensor;
use crate::utils::time::{local_date, start_of_local_day};
use chrono::{DateTime, Local};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Sensor-backed step counter
#[derive(Clone)]
pub struct StepCounter {
    sensor: Arc<dyn StepSensor>,
    store: DailyKeyStore,
}

impl StepCounter {
    /// Counter reading `sensor` and writing to `store`
    #[must_use]
    pub fn new(sensor: Arc<dyn StepSensor>, store: DailyKeyStore) -> Self {
        Self { sensor, store }
    }

    /// Whether the device has a step counter
    pub async fn is_available(&self) -> bool {
        self.sensor.is_available().await
    }

    /// Steps from local midnight to `now`, written back as today's count
    ///
    /// # Errors
    ///
    /// Returns `SENSOR_UNAVAILABLE` if the device has no step counter or the
    /// count query fails
    pub async fn count_today_at(&self, now: DateTime<Local>) -> AppResult<u64> {
        if !self.sensor.is_available().await {
            return Err(AppError::sensor_unavailable(STEP_COUNTER_UNAVAILABLE));
        }

        let steps = self
            .sensor
            .step_count(start_of_local_day(now), now)
            .await?;

        let date = local_date(now);
        persist_or_log(
            StorageKey::daily(Metric::Steps, date),
            self.store
                .record_metric(Metric::Steps, date, steps as f64)
                .await,
        );
        Ok(steps)
    }

    /// Steps today by the system clock
    ///
    /// # Errors
    ///
    /// Returns `SENSOR_UNAVAILABLE` if the count cannot be read
    pub async fn count_today(&self) -> AppResult<u64> {
        self.count_today_at(Local::now()).await
    }

    /// Today's stored count, without querying the sensor
    pub async fn stored_today_at(&self, now: DateTime<Local>) -> Option<f64> {
        self.store.metric_value(Metric::Steps, local_date(now)).await
    }

    /// Count once, then keep counting on every live sensor update
    ///
    /// # Errors
    ///
    /// Returns `SENSOR_UNAVAILABLE` if the initial count or the subscription
    /// fails
    pub async fn start_live_tracker(&self) -> AppResult<StepTrackerHandle> {
        let initial = self.count_today().await?;
        let mut subscription = self.sensor.subscribe().await?;
        let (latest_tx, latest_rx) = watch::channel(initial);
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let counter = self.clone();

        info!(steps = initial, "live step tracking started");
        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    event = subscription.recv() => {
                        let Some(event) = event else {
                            debug!("Step sensor stream ended");
                            break;
                        };
                        match counter.count_today_at(Local::now()).await {
                            Ok(steps) => {
                                debug!(steps, since_subscribe = event.steps_since_subscribe, "step count updated");
                                latest_tx.send_replace(steps);
                            }
                            Err(e) => warn!(error = %e, "step recount failed, keeping last value"),
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("Step tracker received shutdown signal");
                        break;
                    }
                }
            }
            subscription.cancel();
        });

        Ok(StepTrackerHandle {
            shutdown_tx,
            task,
            latest: latest_rx,
        })
    }
}

/// Running live step tracker
///
/// Dropping the handle signals the task to stop; `shutdown` also waits for it.
pub struct StepTrackerHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
    latest: watch::Receiver<u64>,
}

impl StepTrackerHandle {
    /// Most recent count
    #[must_use]
    pub fn latest(&self) -> u64 {
        *self.latest.borrow()
    }

    /// Receiver notified on every recount
    #[must_use]
    pub fn updates(&self) -> watch::Receiver<u64> {
        self.latest.clone()
    }

    /// Stop the task and wait for it to finish
    pub async fn shutdown(mut self) {
        if self.shutdown_tx.send(()).await.is_err() {
            debug!("Step tracker already stopped");
        }
        if let Err(e) = (&mut self.task).await {
            warn!(error = %e, "step tracker task ended abnormally");
        }
    }
}

impl Drop for StepTrackerHandle {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown_tx.try_send(()) {
            debug!(error = ?e, "Step tracker shutdown signal send failed (task likely finished)");
        }
    }
}
