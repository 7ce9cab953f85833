// ABOUTME: Goal commands for fittrack-cli
// ABOUTME: Parses goal form values where an empty value clears the goal
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use fittrack::context::TrackerContext;
use fittrack::errors::AppResult;
use fittrack::models::Metric;
use fittrack::services::parse_goal_input;

use crate::helpers::display::display_goals;

/// Apply the given goal changes; `None` leaves a goal untouched
pub async fn set(
    context: &TrackerContext,
    changes: [(Metric, Option<String>); 4],
) -> AppResult<()> {
    let service = context.goals();
    let mut goals = service.load().await;
    for (metric, input) in changes {
        if let Some(input) = input {
            goals.set(metric, parse_goal_input(&input)?);
        }
    }
    service.save(&goals).await?;
    println!("Goals saved");
    display_goals(&goals);
    Ok(())
}

/// Show current goals
pub async fn show(context: &TrackerContext) {
    display_goals(&context.goals().load().await);
}
