// ABOUTME: Daily workout recommendation from a fixed catalog and the user's workout history
// ABOUTME: Picks the first never-performed catalog entry, else a uniformly random entry
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Workout recommendation
//!
//! Selection excludes every workout type that appears anywhere in the
//! history, however long ago. Once the whole catalog has been performed at
//! least once the pick is random, with no recency weighting.

use fittrack_core::constants::workouts::WORKOUT_CATALOG;
use fittrack_core::models::WorkoutEntry;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Why a workout was recommended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationReason {
    /// First catalog entry not present in the history
    NeverPerformed,
    /// Every catalog entry was already performed
    RandomFallback,
}

/// A recommended workout
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Catalog name of the workout
    pub workout: &'static str,
    /// How it was chosen
    pub reason: RecommendationReason,
}

/// Recommends workouts from an ordered catalog
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine {
    catalog: &'static [&'static str],
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(&WORKOUT_CATALOG)
    }
}

impl RecommendationEngine {
    /// Engine over `catalog`, which must not be empty
    #[must_use]
    pub const fn new(catalog: &'static [&'static str]) -> Self {
        Self { catalog }
    }

    /// Catalog in selection order
    #[must_use]
    pub const fn catalog(&self) -> &'static [&'static str] {
        self.catalog
    }

    /// First catalog entry whose name never appears in `history`
    #[must_use]
    pub fn first_unperformed(&self, history: &[WorkoutEntry]) -> Option<&'static str> {
        let performed: HashSet<&str> = history.iter().map(|e| e.workout_type.as_str()).collect();
        self.catalog
            .iter()
            .copied()
            .find(|name| !performed.contains(name))
    }

    /// Recommend a workout given the full history
    ///
    /// Returns `None` only for an empty catalog.
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        history: &[WorkoutEntry],
        rng: &mut R,
    ) -> Option<Recommendation> {
        if let Some(workout) = self.first_unperformed(history) {
            return Some(Recommendation {
                workout,
                reason: RecommendationReason::NeverPerformed,
            });
        }

        let workout = self.catalog.choose(rng).copied()?;
        debug!(workout, "entire catalog performed, picking at random");
        Some(Recommendation {
            workout,
            reason: RecommendationReason::RandomFallback,
        })
    }
}
