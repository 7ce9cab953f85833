// ABOUTME: Workout and recommendation commands for fittrack-cli
// ABOUTME: Logs and lists workouts, shows and completes the daily recommendation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::Local;
use fittrack::context::TrackerContext;
use fittrack::errors::AppResult;
use fittrack::services::DailyRecommendation;
use tracing::info;

use crate::helpers::display::display_workouts;

/// Log a workout performed now
pub async fn log(context: &TrackerContext, workout_type: &str, duration: &str) -> AppResult<()> {
    let entry = context.workouts().log(workout_type, duration).await?;
    println!(
        "Logged {} ({} min) at {}",
        entry.workout_type, entry.duration, entry.recorded_at
    );
    Ok(())
}

/// List workouts, newest first
pub async fn list(context: &TrackerContext, limit: Option<usize>) {
    let entries = context.workouts().list().await;
    let shown = limit.unwrap_or(entries.len()).min(entries.len());
    display_workouts(&entries[..shown], entries.len());
}

/// Show today's recommendation
pub async fn show_recommendation(context: &TrackerContext) -> AppResult<()> {
    match context.recommendations().today().await? {
        DailyRecommendation::Pending(rec) => {
            println!("Recommended workout: {}", rec.workout);
        }
        DailyRecommendation::Done(marker) => {
            println!("Completed today: {}", marker.workout_type);
        }
    }
    Ok(())
}

/// Mark today's recommendation (or `workout`) as done
pub async fn complete_recommendation(
    context: &TrackerContext,
    workout: Option<&str>,
) -> AppResult<()> {
    let service = context.recommendations();
    let marker = match workout {
        Some(workout) => service.mark_done_at(workout, Local::now()).await?,
        None => service.mark_recommended_done_at(Local::now()).await?,
    };
    info!(workout = %marker.workout_type, "recommendation marked done");
    println!("Completed today: {}", marker.workout_type);
    Ok(())
}
