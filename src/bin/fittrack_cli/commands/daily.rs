// ABOUTME: Daily metric commands for fittrack-cli
// ABOUTME: Water glasses, step count, sleep hours, and calories burned
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::Local;
use fittrack::constants::messages::STEP_COUNTER_UNAVAILABLE;
use fittrack::context::TrackerContext;
use fittrack::errors::AppResult;
use fittrack::intelligence::ActivityType;
use fittrack::models::Metric;
use tracing::debug;

use crate::helpers::display::format_value;

/// Add one glass of water
pub async fn add_water(context: &TrackerContext) {
    let glasses = context.water().add_glass().await;
    println!("Water: {} glasses today", format_value(glasses));
}

/// Show today's water glasses
pub async fn show_water(context: &TrackerContext) {
    let glasses = context.water().count().await;
    println!("Water: {} glasses today", format_value(glasses));
}

/// Show today's steps, falling back to the stored count without a sensor
pub async fn show_steps(context: &TrackerContext) {
    let steps = context.steps();
    match steps.count_today().await {
        Ok(count) => println!("Steps: {count} today"),
        Err(e) => {
            debug!(error = %e, "step count unavailable");
            println!("{STEP_COUNTER_UNAVAILABLE}");
            if let Some(stored) = steps.stored_today_at(Local::now()).await {
                println!("Recorded steps: {}", format_value(stored));
            }
        }
    }
}

/// Overwrite today's value for `metric`
pub async fn set_metric(context: &TrackerContext, metric: Metric, value: f64) -> AppResult<()> {
    let value = context.entries().set_today(metric, value).await?;
    println!(
        "{}: {} {} today",
        metric.label(),
        format_value(value),
        metric.unit()
    );
    Ok(())
}

/// Estimate an activity and add it to today's calories
pub async fn estimate_calories(
    context: &TrackerContext,
    activity: ActivityType,
    weight_kg: f64,
    minutes: f64,
) -> AppResult<()> {
    let estimate = context
        .calories()
        .add_estimate(activity, weight_kg, minutes)
        .await?;
    println!(
        "{activity} for {} min: {} kcal",
        format_value(minutes),
        format_value(estimate.rounded_kcal)
    );
    println!("Calories burned today: {} kcal", format_value(estimate.today_total));
    Ok(())
}
