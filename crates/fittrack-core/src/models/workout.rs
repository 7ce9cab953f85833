// ABOUTME: Workout log entries and the per-day recommended-workout marker
// ABOUTME: Entries keep duration exactly as entered and tolerate legacy free-text timestamps
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Duration of a workout, kept as entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorkoutDuration(String);

impl WorkoutDuration {
    /// Wrap the entered text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Text as entered
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Duration in minutes when the text is a plain number
    #[must_use]
    pub fn minutes(&self) -> Option<f64> {
        self.0.trim().parse::<f64>().ok().filter(|m| m.is_finite())
    }
}

impl fmt::Display for WorkoutDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WorkoutDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Number(number) => Self(number.to_string()),
        })
    }
}

/// When a workout was logged
///
/// Newer entries carry an RFC 3339 timestamp. Older entries carry whatever
/// locale-formatted text the device produced, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkoutTimestamp {
    /// Parsed timestamp with the offset it was recorded in
    At(DateTime<FixedOffset>),
    /// Unparsed legacy text
    Text(String),
}

impl Default for WorkoutTimestamp {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl WorkoutTimestamp {
    /// Local calendar day of the timestamp, when known
    #[must_use]
    pub fn local_date(&self) -> Option<NaiveDate> {
        match self {
            Self::At(at) => Some(at.with_timezone(&Local).date_naive()),
            Self::Text(_) => None,
        }
    }
}

impl From<DateTime<Local>> for WorkoutTimestamp {
    fn from(at: DateTime<Local>) -> Self {
        Self::At(at.fixed_offset())
    }
}

impl fmt::Display for WorkoutTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(at) => write!(f, "{}", at.format("%Y-%m-%d %H:%M")),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One logged workout
///
/// Serialized with the field names older data used (`type`, `duration`, `date`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Free-text workout type, e.g. "Running"
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Duration as entered
    pub duration: WorkoutDuration,
    /// When the entry was logged
    #[serde(rename = "date", default)]
    pub recorded_at: WorkoutTimestamp,
}

impl WorkoutEntry {
    /// Build an entry logged at `at`
    #[must_use]
    pub fn new(
        workout_type: impl Into<String>,
        duration: impl Into<String>,
        at: DateTime<Local>,
    ) -> Self {
        Self {
            workout_type: workout_type.into(),
            duration: WorkoutDuration::new(duration),
            recorded_at: at.into(),
        }
    }
}

/// Which recommended workout was completed on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWorkoutMarker {
    /// Local calendar day
    pub date: NaiveDate,
    /// Catalog name of the completed workout
    pub workout_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_legacy_entry_shape() {
        let raw = r#"[{"type":"Running","duration":"30","date":"1/5/2024, 7:02:11 AM"},
                      {"type":"Yoga","duration":45,"date":"2024-01-04T18:00:00+01:00"}]"#;
        let entries: Vec<WorkoutEntry> = serde_json::from_str(raw).unwrap();

        assert_eq!(entries[0].workout_type, "Running");
        assert_eq!(entries[0].duration.minutes(), Some(30.0));
        assert_eq!(
            entries[0].recorded_at,
            WorkoutTimestamp::Text("1/5/2024, 7:02:11 AM".into())
        );
        assert_eq!(entries[1].duration.as_str(), "45");
        assert!(matches!(entries[1].recorded_at, WorkoutTimestamp::At(_)));
    }

    #[test]
    fn test_writes_original_field_names() {
        let at = Local::now();
        let entry = WorkoutEntry::new("Plank", "half an hour", at);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["type"], "Plank");
        assert_eq!(json["duration"], "half an hour");
        assert!(json["date"].is_string());
        assert_eq!(entry.duration.minutes(), None);
        assert_eq!(entry.recorded_at.local_date(), Some(at.date_naive()));
    }
}
