// ABOUTME: Progress and body-metric commands for fittrack-cli
// ABOUTME: Today's dashboard, the weekly series for one metric, and BMI
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use fittrack::context::TrackerContext;
use fittrack::errors::AppResult;
use fittrack::intelligence::calculate_bmi_from_text;
use fittrack::models::Metric;

use crate::helpers::display::{display_dashboard, display_series};

/// Today's dashboard
pub async fn today(context: &TrackerContext) {
    display_dashboard(&context.aggregator().dashboard().await);
}

/// Trailing week for `metric`
pub async fn week(context: &TrackerContext, metric: Metric) {
    let series = context.aggregator().weekly_series(metric).await;
    display_series(metric, &series);
}

/// BMI from text inputs
pub fn bmi(height_cm: &str, weight_kg: &str) -> AppResult<()> {
    let result = calculate_bmi_from_text(height_cm, weight_kg)?;
    println!("BMI: {} ({})", result.display_value(), result.category);
    Ok(())
}
