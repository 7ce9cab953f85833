// ABOUTME: FitTrack CLI - records daily activity and shows progress from the command line
// ABOUTME: Water, steps, sleep, calories, goals, workouts, recommendations, progress, and BMI
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Drink a glass of water
//! fittrack-cli water add
//!
//! # Set goals (an empty value clears a goal)
//! fittrack-cli goals set --steps 8000 --water 8 --sleep ""
//!
//! # Log a workout
//! fittrack-cli workout log --type Running --duration 30
//!
//! # Complete today's recommended workout
//! fittrack-cli recommend done
//!
//! # Show today's dashboard and the weekly water chart
//! fittrack-cli progress today
//! fittrack-cli progress week --metric water
//!
//! # Compute BMI
//! fittrack-cli bmi --height 180 --weight 80
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use fittrack::config::environment::AppConfig;
use fittrack::context::TrackerContext;
use fittrack::errors::AppResult;
use fittrack::intelligence::ActivityType;
use fittrack::models::Metric;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "FitTrack daily activity tracker",
    long_about = "Record steps, water, sleep, calories, and workouts, set goals, and view progress."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Store URL override (`sqlite:<path>` or `memory:`)
    #[arg(long, global = true)]
    store_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Water glasses
    Water {
        #[command(subcommand)]
        action: WaterCommand,
    },

    /// Step counter
    Steps {
        #[command(subcommand)]
        action: StepsCommand,
    },

    /// Sleep hours
    Sleep {
        #[command(subcommand)]
        action: SleepCommand,
    },

    /// Calories burned
    Calories {
        #[command(subcommand)]
        action: CaloriesCommand,
    },

    /// Goal settings
    Goals {
        #[command(subcommand)]
        action: GoalsCommand,
    },

    /// Workout history
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Daily recommended workout
    Recommend {
        #[command(subcommand)]
        action: RecommendCommand,
    },

    /// Progress toward goals
    Progress {
        #[command(subcommand)]
        action: ProgressCommand,
    },

    /// Body mass index
    Bmi {
        /// Height in centimeters
        #[arg(long)]
        height: String,

        /// Weight in kilograms
        #[arg(long)]
        weight: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WaterCommand {
    /// Add one glass
    Add,
    /// Show today's glasses
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum StepsCommand {
    /// Show today's steps
    Show,
    /// Record today's steps manually
    Record {
        /// Step count
        count: u64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SleepCommand {
    /// Set hours slept last night
    Set {
        /// Hours
        hours: f64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CaloriesCommand {
    /// Estimate an activity and add it to today's total
    Estimate {
        /// Activity (running, walking, cycling, yoga, swimming, strength)
        #[arg(long)]
        activity: ActivityType,

        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Duration in minutes
        #[arg(long)]
        minutes: f64,
    },
    /// Set today's calories burned
    Set {
        /// Kilocalories
        kcal: f64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum GoalsCommand {
    /// Change goals; omitted flags keep their value, empty values clear
    Set {
        /// Daily step goal
        #[arg(long)]
        steps: Option<String>,

        /// Daily water goal (glasses)
        #[arg(long)]
        water: Option<String>,

        /// Sleep goal (hours)
        #[arg(long)]
        sleep: Option<String>,

        /// Calories-burned goal (kcal)
        #[arg(long)]
        calories: Option<String>,
    },
    /// Show current goals
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// Log a workout
    Log {
        /// Workout type, e.g. "Running"
        #[arg(long = "type")]
        workout_type: String,

        /// Duration as entered, e.g. "30"
        #[arg(long)]
        duration: String,
    },
    /// List logged workouts, newest first
    List {
        /// Maximum number of entries
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecommendCommand {
    /// Show today's recommendation
    Show,
    /// Mark today's recommendation as done
    Done {
        /// Workout to record instead of the current recommendation
        #[arg(long)]
        workout: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProgressCommand {
    /// Today's value and progress for every metric
    Today,
    /// Trailing week for one metric
    Week {
        /// Metric (steps, water, calories, sleep)
        #[arg(long, default_value = "steps")]
        metric: Metric,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if cli.verbose {
        config.logging = config.logging.with_level("debug");
    }
    config.logging.init()?;

    if let Some(url) = cli.store_url {
        config.storage.url = url;
    }
    config.log_summary();
    debug!(store_url = %config.storage.url, "opening tracker store");
    let context = TrackerContext::from_config(config).await?;

    match cli.command {
        Command::Water { action } => match action {
            WaterCommand::Add => commands::daily::add_water(&context).await,
            WaterCommand::Show => commands::daily::show_water(&context).await,
        },
        Command::Steps { action } => match action {
            StepsCommand::Show => commands::daily::show_steps(&context).await,
            StepsCommand::Record { count } => {
                commands::daily::set_metric(&context, Metric::Steps, count as f64).await?;
            }
        },
        Command::Sleep { action } => match action {
            SleepCommand::Set { hours } => {
                commands::daily::set_metric(&context, Metric::Sleep, hours).await?;
            }
        },
        Command::Calories { action } => match action {
            CaloriesCommand::Estimate {
                activity,
                weight,
                minutes,
            } => commands::daily::estimate_calories(&context, activity, weight, minutes).await?,
            CaloriesCommand::Set { kcal } => {
                commands::daily::set_metric(&context, Metric::Calories, kcal).await?;
            }
        },
        Command::Goals { action } => match action {
            GoalsCommand::Set {
                steps,
                water,
                sleep,
                calories,
            } => {
                let changes = [
                    (Metric::Steps, steps),
                    (Metric::Water, water),
                    (Metric::Sleep, sleep),
                    (Metric::Calories, calories),
                ];
                commands::goals::set(&context, changes).await?;
            }
            GoalsCommand::Show => commands::goals::show(&context).await,
        },
        Command::Workout { action } => match action {
            WorkoutCommand::Log {
                workout_type,
                duration,
            } => commands::workout::log(&context, &workout_type, &duration).await?,
            WorkoutCommand::List { limit } => commands::workout::list(&context, limit).await,
        },
        Command::Recommend { action } => match action {
            RecommendCommand::Show => commands::workout::show_recommendation(&context).await?,
            RecommendCommand::Done { workout } => {
                commands::workout::complete_recommendation(&context, workout.as_deref()).await?;
            }
        },
        Command::Progress { action } => match action {
            ProgressCommand::Today => commands::progress::today(&context).await,
            ProgressCommand::Week { metric } => commands::progress::week(&context, metric).await,
        },
        Command::Bmi { height, weight } => commands::progress::bmi(&height, &weight)?,
    }

    Ok(())
}
