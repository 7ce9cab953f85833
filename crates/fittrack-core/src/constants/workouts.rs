// ABOUTME: Ordered catalog of bodyweight and cardio workouts offered as daily recommendations
// ABOUTME: Order matters: the first never-performed entry is the one recommended
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Recommendable workouts in selection order
pub const WORKOUT_CATALOG: [&str; 11] = [
    "Push-ups",
    "Squats",
    "Plank",
    "Jumping Jacks",
    "Lunges",
    "Burpees",
    "Mountain Climbers",
    "Crunches",
    "Yoga",
    "Running",
    "Cycling",
];
