// ABOUTME: Integration tests for the two-stage onboarding intake
// ABOUTME: Validates required answers, numeric ranges, completion records and tier gating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{complete_first_draft, complete_second_draft, fixed_now};
use fitcoach::errors::ErrorCode;
use fitcoach::models::{
    FirstIntakeDraft, Gender, InjuryArea, SecondIntakeDraft, SubscriptionTier,
};
use fitcoach::validation::{
    can_access_second_intake, complete_first_intake, complete_second_intake,
    effective_training_days, validate_first_intake, validate_second_intake,
};

#[test]
fn test_first_intake_requires_every_answer() {
    common::init_test_logging();

    let validation = validate_first_intake(&FirstIntakeDraft::default());
    assert!(!validation.is_valid);
    assert_eq!(
        validation.errors,
        vec![
            "Gender is required",
            "Fitness goal is required",
            "Workout location is required",
        ]
    );

    let partial = FirstIntakeDraft {
        gender: Some(Gender::Male),
        ..FirstIntakeDraft::default()
    };
    assert_eq!(validate_first_intake(&partial).errors.len(), 2);
    assert_eq!(partial.answered_steps(), 1);
}

#[test]
fn test_complete_first_intake() {
    let draft = complete_first_draft();
    let validation = validate_first_intake(&draft);
    assert!(validation.is_valid);
    assert!(validation.errors.is_empty());

    let record = complete_first_intake(&draft, fixed_now()).unwrap();
    assert_eq!(record.gender, Gender::Female);
    assert_eq!(record.completed_at, fixed_now());
}

#[test]
fn test_incomplete_first_intake_reports_errors_in_details() {
    let err = complete_first_intake(&FirstIntakeDraft::default(), fixed_now()).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(err.details["errors"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_incomplete_second_intake_error_codes() {
    let missing = SecondIntakeDraft {
        experience_level: None,
        age: Some(10),
        ..complete_second_draft()
    };
    let err = complete_second_intake(&missing, fixed_now()).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(err.details["errors"].as_array().map(Vec::len), Some(2));

    let out_of_range = SecondIntakeDraft {
        age: Some(10),
        ..complete_second_draft()
    };
    let err = complete_second_intake(&out_of_range, fixed_now()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(err.details["errors"][0].as_str().unwrap().contains("age"));
}

#[test]
fn test_second_intake_accepts_range_boundaries() {
    let draft = SecondIntakeDraft {
        age: Some(13),
        weight_kg: Some(300.0),
        height_cm: Some(100.0),
        workout_frequency: Some(6),
        ..complete_second_draft()
    };
    assert!(validate_second_intake(&draft).is_valid);

    let draft = SecondIntakeDraft {
        age: Some(120),
        weight_kg: Some(30.0),
        height_cm: Some(250.0),
        workout_frequency: Some(2),
        ..complete_second_draft()
    };
    assert!(validate_second_intake(&draft).is_valid);
}

#[test]
fn test_second_intake_reports_one_error_per_field() {
    let draft = SecondIntakeDraft {
        age: Some(12),
        weight_kg: Some(29.9),
        height_cm: Some(251.0),
        experience_level: None,
        workout_frequency: Some(7),
        injuries: None,
    };
    let validation = validate_second_intake(&draft);
    assert!(!validation.is_valid);
    assert_eq!(validation.errors.len(), 5);
    assert!(validation.errors[0].contains("age"));
    assert!(validation.errors[1].contains("weight"));
    assert!(validation.errors[2].contains("height"));
    assert!(validation.errors[3].contains("Experience"));
    assert!(validation.errors[4].contains("frequency"));
}

#[test]
fn test_underage_user_is_rejected() {
    let draft = SecondIntakeDraft {
        age: Some(10),
        ..complete_second_draft()
    };
    let validation = validate_second_intake(&draft);
    assert!(!validation.is_valid);
    assert_eq!(validation.errors.len(), 1);
    assert!(validation.errors[0].contains("age"));
}

#[test]
fn test_second_intake_injuries_are_optional() {
    let draft = SecondIntakeDraft {
        injuries: None,
        ..complete_second_draft()
    };
    assert!(validate_second_intake(&draft).is_valid);
    assert_eq!(draft.answered_steps(), 4);

    let record = complete_second_intake(&draft, fixed_now()).unwrap();
    assert!(record.injuries.is_empty());
}

#[test]
fn test_complete_second_intake_keeps_injuries() {
    let record = complete_second_intake(&complete_second_draft(), fixed_now()).unwrap();
    assert!(record.injuries.contains(&InjuryArea::Knee));
    assert_eq!(record.workout_frequency, 4);
}

#[test]
fn test_body_metrics_step_needs_both_values() {
    let draft = SecondIntakeDraft {
        height_cm: None,
        ..complete_second_draft()
    };
    assert_eq!(draft.answered_steps(), 4);
    assert_eq!(draft.total_steps(), 5);
}

#[test]
fn test_second_intake_is_gated_to_paid_tiers() {
    assert!(!can_access_second_intake(SubscriptionTier::Freemium));
    assert!(can_access_second_intake(SubscriptionTier::Premium));
    assert!(can_access_second_intake(SubscriptionTier::SmartPremium));
}

#[test]
fn test_freemium_training_days_are_fixed() {
    assert_eq!(effective_training_days(SubscriptionTier::Freemium, Some(5)), 3);
    assert_eq!(effective_training_days(SubscriptionTier::Premium, Some(5)), 5);
}

#[test]
fn test_answers_parse_from_codes() {
    assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
    assert_eq!(" Lower_Back ".parse::<InjuryArea>().unwrap(), InjuryArea::LowerBack);

    let err = "elbow".parse::<InjuryArea>().unwrap_err();
    assert!(err.message.contains("elbow"));
    assert!(err.message.contains("lower_back"));
}

#[test]
fn test_same_draft_gives_same_validation() {
    let first = FirstIntakeDraft {
        gender: Some(Gender::Male),
        ..FirstIntakeDraft::default()
    };
    assert_eq!(validate_first_intake(&first), validate_first_intake(&first));

    let second = SecondIntakeDraft {
        age: Some(10),
        ..complete_second_draft()
    };
    assert_eq!(validate_second_intake(&second), validate_second_intake(&second));
    assert_eq!(
        complete_second_intake(&complete_second_draft(), fixed_now()).unwrap(),
        complete_second_intake(&complete_second_draft(), fixed_now()).unwrap()
    );
}
