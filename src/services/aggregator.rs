// ABOUTME: Metric aggregation for today's progress rings and the trailing weekly series
// ABOUTME: Today's steps come from the sensor and today's water honors the legacy fallback
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::daily_store::DailyKeyStore;
use super::goals::GoalService;
use super::steps::StepCounter;
use super::water::WaterTracker;
use crate::intelligence::{percent, progress_ratio, series_from_values, trailing_window, ProgressPoint};
use crate::models::Metric;
use crate::utils::time::local_date;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use tracing::warn;

/// One metric on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    /// Metric shown
    pub metric: Metric,
    /// Today's value; zero when nothing was recorded
    pub value: f64,
    /// Goal, if set
    pub goal: Option<f64>,
    /// Progress in `[0, 1]`; `None` when no positive goal is set
    pub ratio: Option<f64>,
    /// `ratio` as a rounded percentage
    pub percent: Option<u8>,
}

/// Today's values and progress for every metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Local calendar day summarized
    pub date: NaiveDate,
    /// One entry per metric in dashboard order
    pub metrics: Vec<MetricSummary>,
}

impl DashboardSummary {
    /// Summary for `metric`
    #[must_use]
    pub fn metric(&self, metric: Metric) -> Option<&MetricSummary> {
        self.metrics.iter().find(|m| m.metric == metric)
    }
}

/// Reads daily values and goals and turns them into progress
#[derive(Clone)]
pub struct MetricsAggregator {
    store: DailyKeyStore,
    water: WaterTracker,
    steps: StepCounter,
    goals: GoalService,
    window_days: usize,
}

impl MetricsAggregator {
    /// Aggregator over `store`, with today's steps read through `steps`
    #[must_use]
    pub fn new(store: DailyKeyStore, steps: StepCounter, window_days: usize) -> Self {
        Self {
            water: WaterTracker::new(store.clone()),
            goals: GoalService::new(store.clone()),
            store,
            steps,
            window_days,
        }
    }

    /// Value for `metric` on `date`, as seen at `now`
    ///
    /// Past days read the dated key only. For today, steps come from the
    /// sensor (falling back to the stored count) and water falls back to the
    /// legacy key.
    pub async fn value_on(&self, metric: Metric, date: NaiveDate, now: DateTime<Local>) -> Option<f64> {
        if date != local_date(now) {
            return self.store.metric_value(metric, date).await;
        }
        match metric {
            Metric::Steps => match self.steps.count_today_at(now).await {
                Ok(steps) => Some(steps as f64),
                Err(e) => {
                    warn!(error = %e, "step sensor read failed, using stored count");
                    self.steps.stored_today_at(now).await
                }
            },
            Metric::Water => self.water.stored_count_at(now).await,
            Metric::Calories | Metric::Sleep => self.store.metric_value(metric, date).await,
        }
    }

    /// Today's value for `metric`; zero when nothing was recorded
    pub async fn today_value_at(&self, metric: Metric, now: DateTime<Local>) -> f64 {
        self.value_on(metric, local_date(now), now)
            .await
            .unwrap_or(0.0)
    }

    /// Today's progress toward the goal; `None` when no positive goal is set
    pub async fn today_progress_at(&self, metric: Metric, now: DateTime<Local>) -> Option<f64> {
        let goal = self.goals.load().await.get(metric);
        progress_ratio(self.today_value_at(metric, now).await, goal)
    }

    /// Today's progress by the system clock
    pub async fn today_progress(&self, metric: Metric) -> Option<f64> {
        self.today_progress_at(metric, Local::now()).await
    }

    /// Trailing window of daily values ending today, oldest first
    ///
    /// Days with no record have value zero. Ratios are zero when no goal is set.
    pub async fn weekly_series_at(&self, metric: Metric, now: DateTime<Local>) -> Vec<ProgressPoint> {
        let goal = self.goals.load().await.get(metric);
        let mut values = Vec::with_capacity(self.window_days);
        for date in trailing_window(local_date(now), self.window_days) {
            values.push((date, self.value_on(metric, date, now).await));
        }
        series_from_values(&values, goal)
    }

    /// Trailing window by the system clock
    pub async fn weekly_series(&self, metric: Metric) -> Vec<ProgressPoint> {
        self.weekly_series_at(metric, Local::now()).await
    }

    /// Today's summary for every metric
    pub async fn dashboard_at(&self, now: DateTime<Local>) -> DashboardSummary {
        let goals = self.goals.load().await;
        let mut metrics = Vec::with_capacity(Metric::ALL.len());
        for metric in Metric::ALL {
            let value = self.today_value_at(metric, now).await;
            let goal = goals.get(metric);
            let ratio = progress_ratio(value, goal);
            metrics.push(MetricSummary {
                metric,
                value,
                goal,
                ratio,
                percent: ratio.map(percent),
            });
        }
        DashboardSummary {
            date: local_date(now),
            metrics,
        }
    }

    /// Today's summary by the system clock
    pub async fn dashboard(&self) -> DashboardSummary {
        self.dashboard_at(Local::now()).await
    }
}
