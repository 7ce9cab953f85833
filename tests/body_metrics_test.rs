// ABOUTME: Integration tests for BMI and calories-burned estimation
// ABOUTME: Covers BMI categories and input validation, and estimates accumulating into today's total
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use anyhow::Result;
use fittrack::errors::ErrorCode;
use fittrack::intelligence::{calculate_bmi_from_text, ActivityType, BmiCategory};
use fittrack::models::Metric;
use fittrack::storage::KeyValueStore;
use helpers::test_utils::{fixed_now, tracker};

#[test]
fn test_bmi_reference_values() -> Result<()> {
    let normal = calculate_bmi_from_text("180", "80")?;
    assert_eq!(normal.display_value(), "24.7");
    assert!((normal.value - 24.69).abs() < 0.01);
    assert_eq!(normal.category, BmiCategory::Normal);
    assert_eq!(normal.category.to_string(), "Normal");

    let obese = calculate_bmi_from_text("150", "90")?;
    assert_eq!(obese.display_value(), "40.0");
    assert_eq!(obese.category, BmiCategory::Obese);
    Ok(())
}

#[test]
fn test_bmi_rejects_missing_and_zero_input() {
    assert_eq!(
        calculate_bmi_from_text("", "80").unwrap_err().code,
        ErrorCode::MissingRequiredField
    );
    assert_eq!(
        calculate_bmi_from_text("180", "  ").unwrap_err().code,
        ErrorCode::MissingRequiredField
    );
    assert_eq!(
        calculate_bmi_from_text("0", "80").unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        calculate_bmi_from_text("tall", "80").unwrap_err().code,
        ErrorCode::InvalidInput
    );
}

#[tokio::test]
async fn test_estimates_accumulate_into_today() -> Result<()> {
    let t = tracker();
    let calories = t.context.calories();

    // 9.8 * 70 * 0.5 = 343
    let first = calories
        .add_estimate_at(ActivityType::Running, 70.0, 30.0, fixed_now())
        .await?;
    assert!((first.rounded_kcal - 343.0).abs() < f64::EPSILON);
    assert!((first.today_total - 343.0).abs() < f64::EPSILON);

    // 3.8 * 65 * 0.75 = 185.25, rounded to 185
    let second = calories
        .add_estimate_at(ActivityType::Walking, 65.0, 45.0, fixed_now())
        .await?;
    assert!((second.kcal - 185.25).abs() < 1e-9);
    assert!((second.rounded_kcal - 185.0).abs() < f64::EPSILON);
    assert!((second.today_total - 528.0).abs() < f64::EPSILON);

    assert_eq!(t.store.get("@calories_2024-3-15").await?.as_deref(), Some("528"));
    Ok(())
}

#[tokio::test]
async fn test_estimate_adds_to_manual_entry() -> Result<()> {
    let t = tracker();
    t.context
        .entries()
        .set_today_at(Metric::Calories, 100.0, fixed_now())
        .await?;

    let estimate = t
        .context
        .calories()
        .add_estimate_at(ActivityType::Yoga, 60.0, 60.0, fixed_now())
        .await?;
    assert!((estimate.today_total - 250.0).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_invalid_estimate_changes_nothing() -> Result<()> {
    let t = tracker();
    let err = t
        .context
        .calories()
        .add_estimate_at(ActivityType::Swimming, 0.0, 30.0, fixed_now())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(t.store.is_empty().await);
    Ok(())
}

#[test]
fn test_activity_parsing() {
    assert_eq!("Running".parse::<ActivityType>().unwrap(), ActivityType::Running);
    assert_eq!(ActivityType::ALL.len(), 6);
    assert!("skydiving".parse::<ActivityType>().is_err());
}
