// ABOUTME: Output formatting helpers for fittrack-cli
// ABOUTME: Renders goals, workouts, the dashboard, and weekly series as plain text
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use fittrack::intelligence::ProgressPoint;
use fittrack::models::{GoalSettings, Metric, WorkoutEntry};
use fittrack::services::DashboardSummary;

const BAR_WIDTH: usize = 20;

/// Whole numbers without a trailing `.0`, fractions to one decimal
pub fn format_value(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn bar(ratio: f64) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Current goal settings
pub fn display_goals(goals: &GoalSettings) {
    for metric in Metric::ALL {
        let goal = goals
            .get(metric)
            .map_or_else(|| "not set".to_owned(), |g| format!("{} {}", format_value(g), metric.unit()));
        println!("   {:<9} {goal}", metric.label());
    }
}

/// Workout entries, newest first
pub fn display_workouts(entries: &[WorkoutEntry], total: usize) {
    if entries.is_empty() {
        println!("No workouts logged yet");
        return;
    }
    for entry in entries {
        println!(
            "   {:<18} {:>6} min   {}",
            entry.workout_type, entry.duration, entry.recorded_at
        );
    }
    if entries.len() < total {
        println!("   ... {} more", total - entries.len());
    }
}

/// Today's dashboard
pub fn display_dashboard(summary: &DashboardSummary) {
    println!("Progress for {}", summary.date);
    println!("{}", "=".repeat(50));
    for m in &summary.metrics {
        let goal = m
            .goal
            .map_or_else(|| "-".to_owned(), format_value);
        let progress = match (m.ratio, m.percent) {
            (Some(ratio), Some(pct)) => format!("{} {pct}%", bar(ratio)),
            _ => "goal unset".to_owned(),
        };
        println!(
            "   {:<9} {:>7} / {:<7} {:<8} {progress}",
            m.metric.label(),
            format_value(m.value),
            goal,
            m.metric.unit()
        );
    }
}

/// Weekly series, oldest first
pub fn display_series(metric: Metric, series: &[ProgressPoint]) {
    println!("{} over the last {} days", metric.label(), series.len());
    for point in series {
        println!(
            "   {} {}  {} {:>7}",
            point.label,
            point.date,
            bar(point.ratio),
            format_value(point.value)
        );
    }
}
