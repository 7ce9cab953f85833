// ABOUTME: Global per-metric goal settings with explicit absence for unset goals
// ABOUTME: A goal that is absent or not positive never produces a progress ratio
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::Metric;
use serde::{Deserialize, Serialize};

/// User-set daily targets, one optional value per metric
///
/// Saved wholesale: every field is written on save, absent fields clear the
/// stored goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalSettings {
    /// Daily step target
    pub step_goal: Option<f64>,
    /// Daily water target (glasses)
    pub water_goal: Option<f64>,
    /// Nightly sleep target (hours)
    pub sleep_goal: Option<f64>,
    /// Daily calories-burned target (kcal)
    pub calorie_goal: Option<f64>,
}

impl GoalSettings {
    /// Stored goal for `metric`, whatever its value
    #[must_use]
    pub const fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Steps => self.step_goal,
            Metric::Water => self.water_goal,
            Metric::Calories => self.calorie_goal,
            Metric::Sleep => self.sleep_goal,
        }
    }

    /// Replace the goal for `metric`
    pub fn set(&mut self, metric: Metric, goal: Option<f64>) {
        let slot = match metric {
            Metric::Steps => &mut self.step_goal,
            Metric::Water => &mut self.water_goal,
            Metric::Calories => &mut self.calorie_goal,
            Metric::Sleep => &mut self.sleep_goal,
        };
        *slot = goal;
    }

    /// Goal usable as a divisor: present and strictly positive
    #[must_use]
    pub fn effective(&self, metric: Metric) -> Option<f64> {
        self.get(metric).filter(|goal| *goal > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_goal_ignores_zero_and_negative() {
        let mut goals = GoalSettings::default();
        assert_eq!(goals.effective(Metric::Steps), None);

        goals.set(Metric::Steps, Some(0.0));
        assert_eq!(goals.get(Metric::Steps), Some(0.0));
        assert_eq!(goals.effective(Metric::Steps), None);

        goals.set(Metric::Water, Some(-3.0));
        assert_eq!(goals.effective(Metric::Water), None);

        goals.set(Metric::Sleep, Some(8.0));
        assert_eq!(goals.effective(Metric::Sleep), Some(8.0));
    }
}
