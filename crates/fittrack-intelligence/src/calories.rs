// ABOUTME: Calories-burned estimation from activity MET, body weight, and duration
// ABOUTME: kcal = MET x weight_kg x minutes / 60
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::physiological_constants::met;
use fittrack_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activity with a known metabolic equivalent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Running (9.8 MET)
    Running,
    /// Walking (3.8 MET)
    Walking,
    /// Cycling (7.5 MET)
    Cycling,
    /// Yoga (2.5 MET)
    Yoga,
    /// Swimming (8.0 MET)
    Swimming,
    /// Strength training (6.0 MET)
    Strength,
}

impl ActivityType {
    /// Every supported activity
    pub const ALL: [Self; 6] = [
        Self::Running,
        Self::Walking,
        Self::Cycling,
        Self::Yoga,
        Self::Swimming,
        Self::Strength,
    ];

    /// Metabolic equivalent of task
    #[must_use]
    pub const fn met(self) -> f64 {
        match self {
            Self::Running => met::RUNNING,
            Self::Walking => met::WALKING,
            Self::Cycling => met::CYCLING,
            Self::Yoga => met::YOGA,
            Self::Swimming => met::SWIMMING,
            Self::Strength => met::STRENGTH,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Yoga => "yoga",
            Self::Swimming => "swimming",
            Self::Strength => "strength",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "walking" => Ok(Self::Walking),
            "cycling" => Ok(Self::Cycling),
            "yoga" => Ok(Self::Yoga),
            "swimming" => Ok(Self::Swimming),
            "strength" => Ok(Self::Strength),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity: '{other}'. Valid options: running, walking, cycling, yoga, swimming, strength"
            ))),
        }
    }
}

/// Estimate calories burned
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if weight or duration is not a positive
/// finite number.
pub fn estimate_calories(activity: ActivityType, weight_kg: f64, minutes: f64) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be a positive number of kilograms, got {weight_kg}"
        )));
    }
    if !minutes.is_finite() || minutes <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Duration must be a positive number of minutes, got {minutes}"
        )));
    }

    Ok(activity.met() * weight_kg * (minutes / met::MINUTES_PER_HOUR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_half_hour() {
        // 9.8 * 70 * 0.5
        let kcal = estimate_calories(ActivityType::Running, 70.0, 30.0).unwrap();
        assert!((kcal - 343.0).abs() < 1e-9);
    }

    #[test]
    fn test_yoga_hour() {
        let kcal = estimate_calories(ActivityType::Yoga, 60.0, 60.0).unwrap();
        assert!((kcal - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(estimate_calories(ActivityType::Walking, 0.0, 30.0).is_err());
        assert!(estimate_calories(ActivityType::Walking, 70.0, -5.0).is_err());
        assert!(estimate_calories(ActivityType::Walking, f64::NAN, 30.0).is_err());
    }

    #[test]
    fn test_parse_activity() {
        assert_eq!("Swimming".parse::<ActivityType>().unwrap(), ActivityType::Swimming);
        assert!("dancing".parse::<ActivityType>().is_err());
        for activity in ActivityType::ALL {
            assert_eq!(activity.name().parse::<ActivityType>().unwrap(), activity);
        }
    }
}
