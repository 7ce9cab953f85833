// ABOUTME: Tracked daily metrics and the structured storage keys built from them
// ABOUTME: Renders keys as `{prefix}_{year}-{month}-{day}` with unpadded month and day
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::constants::storage_keys::{
    CALORIES_PREFIX, CALORIE_GOAL, LEGACY_WATER_COUNT, SLEEP_GOAL, SLEEP_PREFIX,
    STEP_COUNT_PREFIX, STEP_GOAL, WATER_COUNT_PREFIX, WATER_GOAL, WORKOUTS,
    WORKOUT_TODAY_PREFIX,
};
use crate::errors::AppError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One tracked daily quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Steps walked (integer count)
    Steps,
    /// Glasses of water
    Water,
    /// Calories burned (kcal)
    Calories,
    /// Hours slept
    Sleep,
}

impl Metric {
    /// All metrics in dashboard order
    pub const ALL: [Self; 4] = [Self::Steps, Self::Water, Self::Calories, Self::Sleep];

    /// Prefix of the dated storage key
    #[must_use]
    pub const fn storage_prefix(self) -> &'static str {
        match self {
            Self::Steps => STEP_COUNT_PREFIX,
            Self::Water => WATER_COUNT_PREFIX,
            Self::Calories => CALORIES_PREFIX,
            Self::Sleep => SLEEP_PREFIX,
        }
    }

    /// Storage key holding the global goal for this metric
    #[must_use]
    pub const fn goal_key(self) -> &'static str {
        match self {
            Self::Steps => STEP_GOAL,
            Self::Water => WATER_GOAL,
            Self::Calories => CALORIE_GOAL,
            Self::Sleep => SLEEP_GOAL,
        }
    }

    /// Whether values are whole numbers (sleep hours are fractional)
    #[must_use]
    pub const fn is_integral(self) -> bool {
        !matches!(self, Self::Sleep)
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Steps => "Steps",
            Self::Water => "Water",
            Self::Calories => "Calories",
            Self::Sleep => "Sleep",
        }
    }

    /// Unit shown next to values
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Water => "glasses",
            Self::Calories => "kcal",
            Self::Sleep => "hrs",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Steps => "steps",
            Self::Water => "water",
            Self::Calories => "calories",
            Self::Sleep => "sleep",
        };
        f.write_str(name)
    }
}

impl FromStr for Metric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "steps" | "step" => Ok(Self::Steps),
            "water" => Ok(Self::Water),
            "calories" | "cal" | "kcal" => Ok(Self::Calories),
            "sleep" => Ok(Self::Sleep),
            other => Err(AppError::invalid_input(format!(
                "Unknown metric '{other}' (expected steps, water, calories, or sleep)"
            ))),
        }
    }
}

/// A metric value recorded for one local calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Which metric
    pub metric: Metric,
    /// Local calendar day
    pub date: NaiveDate,
    /// Recorded value
    pub value: f64,
}

/// Structured key for every value the tracker persists
///
/// Rendering goes through `Display` so no caller concatenates key strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Metric value for one local calendar day
    Daily {
        /// Metric being recorded
        metric: Metric,
        /// Local calendar day
        date: NaiveDate,
    },
    /// Global goal for a metric
    Goal(Metric),
    /// Non-dated water mirror kept for older data
    LegacyWater,
    /// Serialized workout history
    Workouts,
    /// Which recommended workout was completed on a given day
    WorkoutMarker(NaiveDate),
}

impl StorageKey {
    /// Dated key for `metric` on `date`
    #[must_use]
    pub const fn daily(metric: Metric, date: NaiveDate) -> Self {
        Self::Daily { metric, date }
    }
}

/// `{year}-{month}-{day}` without zero padding
fn write_day(f: &mut fmt::Formatter<'_>, date: NaiveDate) -> fmt::Result {
    write!(f, "{}-{}-{}", date.year(), date.month(), date.day())
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily { metric, date } => {
                write!(f, "{}_", metric.storage_prefix())?;
                write_day(f, *date)
            }
            Self::Goal(metric) => f.write_str(metric.goal_key()),
            Self::LegacyWater => f.write_str(LEGACY_WATER_COUNT),
            Self::Workouts => f.write_str(WORKOUTS),
            Self::WorkoutMarker(date) => {
                write!(f, "{WORKOUT_TODAY_PREFIX}_")?;
                write_day(f, *date)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_key_is_unpadded() {
        let key = StorageKey::daily(Metric::Water, day(2024, 1, 5));
        assert_eq!(key.to_string(), "@water_count_2024-1-5");

        let key = StorageKey::daily(Metric::Steps, day(2024, 10, 15));
        assert_eq!(key.to_string(), "@step_count_2024-10-15");
    }

    #[test]
    fn test_marker_key_format() {
        let key = StorageKey::WorkoutMarker(day(2025, 3, 9));
        assert_eq!(key.to_string(), "@workout_today_2025-3-9");
    }

    #[test]
    fn test_keys_are_distinct_across_metrics_and_dates() {
        let dates = [day(2024, 1, 11), day(2024, 11, 1), day(2024, 1, 1), day(2025, 1, 1)];
        let mut rendered = HashSet::new();
        for metric in Metric::ALL {
            for date in dates {
                assert!(rendered.insert(StorageKey::daily(metric, date).to_string()));
            }
        }
        assert_eq!(rendered.len(), Metric::ALL.len() * dates.len());
    }

    #[test]
    fn test_legacy_water_key_differs_from_dated_keys() {
        let dated = StorageKey::daily(Metric::Water, day(2024, 2, 2)).to_string();
        assert_ne!(dated, StorageKey::LegacyWater.to_string());
        assert!(dated.starts_with(&StorageKey::LegacyWater.to_string()));
    }

    #[test]
    fn test_metric_parse() {
        assert_eq!("Water".parse::<Metric>().unwrap(), Metric::Water);
        assert_eq!("kcal".parse::<Metric>().unwrap(), Metric::Calories);
        assert!("pushups".parse::<Metric>().is_err());
    }
}
