// ABOUTME: Body-mass index from height and weight with WHO adult classification
// ABOUTME: Rejects missing, zero, or negative measurements instead of producing infinities
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::physiological_constants::bmi::{
    CM_PER_METER, NORMAL_UPPER, OVERWEIGHT_UPPER, UNDERWEIGHT_UPPER,
};
use fittrack_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Adult BMI category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// 18.5 to below 25
    Normal,
    /// 25 to below 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_UPPER {
            Self::Underweight
        } else if bmi < NORMAL_UPPER {
            Self::Normal
        } else if bmi < OVERWEIGHT_UPPER {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computed BMI with its category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiResult {
    /// Unrounded BMI (kg/m²)
    pub value: f64,
    /// Category of `value`
    pub category: BmiCategory,
}

impl BmiResult {
    /// BMI rounded to one decimal place for display
    #[must_use]
    pub fn display_value(&self) -> String {
        format!("{:.1}", self.value)
    }
}

/// Calculate BMI from height in centimeters and weight in kilograms
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if either measurement is zero, negative,
/// or not finite.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> AppResult<BmiResult> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Height must be a positive number of centimeters, got {height_cm}"
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be a positive number of kilograms, got {weight_kg}"
        )));
    }

    let height_m = height_cm / CM_PER_METER;
    let value = weight_kg / (height_m * height_m);

    Ok(BmiResult {
        value,
        category: BmiCategory::from_bmi(value),
    })
}

/// Calculate BMI from form text, treating blank fields as missing
///
/// # Errors
///
/// Returns `AppError::MissingRequiredField` for a blank field and
/// `AppError::InvalidInput` for text that is not a positive number.
pub fn calculate_bmi_from_text(height_cm: &str, weight_kg: &str) -> AppResult<BmiResult> {
    let height = parse_measurement("height", height_cm)?;
    let weight = parse_measurement("weight", weight_kg)?;
    calculate_bmi(height, weight)
}

fn parse_measurement(field: &str, text: &str) -> AppResult<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::missing_field(field));
    }
    text.parse::<f64>()
        .map_err(|_| AppError::invalid_input(format!("{field} must be a number, got '{text}'")))
}
