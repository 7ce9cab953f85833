// ABOUTME: Goal progress math for single-value displays and weekly charts
// ABOUTME: Builds trailing local-date windows and short weekday labels
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Progress calculations
//!
//! A goal that is absent or not positive has two presentations that must stay
//! distinct: single-value displays show "unset" (`progress_ratio` returns
//! `None`), while charts draw an empty bar (`chart_ratio` returns `0.0`).

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Progress toward `goal`, clamped to `[0, 1]`
///
/// `None` when the goal is absent or not positive.
#[must_use]
pub fn progress_ratio(value: f64, goal: Option<f64>) -> Option<f64> {
    let goal = goal.filter(|g| *g > 0.0)?;
    let ratio = value / goal;
    if ratio.is_nan() {
        return Some(0.0);
    }
    Some(ratio.clamp(0.0, 1.0))
}

/// Ratio drawn on a chart: unset goals draw as zero
#[must_use]
pub fn chart_ratio(value: f64, goal: Option<f64>) -> f64 {
    progress_ratio(value, goal).unwrap_or(0.0)
}

/// Ratio as a rounded whole percentage (0-100)
#[must_use]
pub fn percent(ratio: f64) -> u8 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// The `days` local dates ending at `today`, oldest first
#[must_use]
pub fn trailing_window(today: NaiveDate, days: usize) -> Vec<NaiveDate> {
    (0..days)
        .rev()
        .filter_map(|offset| u64::try_from(offset).ok())
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .collect()
}

/// Short weekday name, e.g. "Mon"
#[must_use]
pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// One bar of a weekly chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    /// Local calendar day
    pub date: NaiveDate,
    /// Short weekday label
    pub label: String,
    /// Recorded value (0 when nothing was recorded)
    pub value: f64,
    /// Chart ratio in `[0, 1]`
    pub ratio: f64,
}

/// Chart points for dated values, missing values counting as zero
#[must_use]
pub fn series_from_values(values: &[(NaiveDate, Option<f64>)], goal: Option<f64>) -> Vec<ProgressPoint> {
    values
        .iter()
        .map(|(date, value)| {
            let value = value.unwrap_or(0.0);
            ProgressPoint {
                date: *date,
                label: weekday_label(*date).to_owned(),
                value,
                ratio: chart_ratio(value, goal),
            }
        })
        .collect()
}
