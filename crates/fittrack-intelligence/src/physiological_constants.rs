// ABOUTME: Reference values for BMI classification and MET-based energy expenditure
// ABOUTME: Thresholds follow WHO adult BMI bands and the Compendium of Physical Activities
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Physiological constants
//!
//! Values shared by the BMI and calories modules.

/// Adult BMI classification bands
///
/// Reference: World Health Organization, "Body mass index - BMI"
pub mod bmi {
    /// Below this is underweight
    pub const UNDERWEIGHT_UPPER: f64 = 18.5;
    /// Below this (and at least underweight upper) is normal weight
    pub const NORMAL_UPPER: f64 = 25.0;
    /// Below this (and at least normal upper) is overweight; at or above is obese
    pub const OVERWEIGHT_UPPER: f64 = 30.0;
    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;
}

/// Metabolic equivalents of task (kcal per kg per hour)
///
/// Reference: Ainsworth, B.E. et al. (2011). Compendium of Physical Activities.
/// *Med Sci Sports Exerc*, 43(8), 1575-1581.
pub mod met {
    /// Running, general
    pub const RUNNING: f64 = 9.8;
    /// Walking, moderate pace
    pub const WALKING: f64 = 3.8;
    /// Cycling, moderate effort
    pub const CYCLING: f64 = 7.5;
    /// Yoga, hatha
    pub const YOGA: f64 = 2.5;
    /// Swimming, general
    pub const SWIMMING: f64 = 8.0;
    /// Resistance training, vigorous
    pub const STRENGTH: f64 = 6.0;
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}
