// ABOUTME: Two-stage onboarding intake validation, completion and tier gating
// ABOUTME: Accumulates one message per failing field so every problem is shown at once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::intake::{
    AGE_MAX, AGE_MIN, DEFAULT_TRAINING_DAYS, FREQUENCY_MAX, FREQUENCY_MIN, HEIGHT_MAX_CM,
    HEIGHT_MIN_CM, WEIGHT_MAX_KG, WEIGHT_MIN_KG,
};
use crate::errors::{AppError, AppResult};
use crate::models::{
    FirstIntakeData, FirstIntakeDraft, IntakeValidation, SecondIntakeData, SecondIntakeDraft,
    SubscriptionTier,
};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::ops::RangeInclusive;
use tracing::debug;

const AGE_RANGE: RangeInclusive<u32> = AGE_MIN..=AGE_MAX;
const WEIGHT_RANGE: RangeInclusive<f64> = WEIGHT_MIN_KG..=WEIGHT_MAX_KG;
const HEIGHT_RANGE: RangeInclusive<f64> = HEIGHT_MIN_CM..=HEIGHT_MAX_CM;
const FREQUENCY_RANGE: RangeInclusive<u32> = FREQUENCY_MIN..=FREQUENCY_MAX;

/// Check the first intake: gender, goal and location are all required
#[must_use]
pub fn validate_first_intake(draft: &FirstIntakeDraft) -> IntakeValidation {
    let mut errors = Vec::new();

    if draft.gender.is_none() {
        errors.push("Gender is required".to_owned());
    }
    if draft.main_goal.is_none() {
        errors.push("Fitness goal is required".to_owned());
    }
    if draft.workout_location.is_none() {
        errors.push("Workout location is required".to_owned());
    }

    report("first", errors)
}

/// Check the second intake: ranges for age, weight, height and frequency,
/// presence of the experience level. Injuries are optional.
#[must_use]
pub fn validate_second_intake(draft: &SecondIntakeDraft) -> IntakeValidation {
    let mut errors = Vec::new();

    if !draft.age.is_some_and(|age| AGE_RANGE.contains(&age)) {
        errors.push(format!("Valid age is required ({AGE_MIN}-{AGE_MAX})"));
    }
    if !draft.weight_kg.is_some_and(|weight| within(&WEIGHT_RANGE, weight)) {
        errors.push(format!(
            "Valid weight is required ({WEIGHT_MIN_KG}-{WEIGHT_MAX_KG} kg)"
        ));
    }
    if !draft.height_cm.is_some_and(|height| within(&HEIGHT_RANGE, height)) {
        errors.push(format!(
            "Valid height is required ({HEIGHT_MIN_CM}-{HEIGHT_MAX_CM} cm)"
        ));
    }
    if draft.experience_level.is_none() {
        errors.push("Experience level is required".to_owned());
    }
    if !draft
        .workout_frequency
        .is_some_and(|days| FREQUENCY_RANGE.contains(&days))
    {
        errors.push(format!(
            "Workout frequency must be {FREQUENCY_MIN}-{FREQUENCY_MAX} days per week"
        ));
    }

    report("second", errors)
}

fn within(range: &RangeInclusive<f64>, value: f64) -> bool {
    value.is_finite() && range.contains(&value)
}

fn report(stage: &str, errors: Vec<String>) -> IntakeValidation {
    if !errors.is_empty() {
        debug!(stage, error_count = errors.len(), "Intake draft incomplete");
    }
    IntakeValidation::from_errors(errors)
}

fn incomplete(stage: &str, missing_answer: bool, validation: &IntakeValidation) -> AppError {
    let message = format!("{stage} intake is incomplete");
    let error = if missing_answer {
        AppError::missing_field(message)
    } else {
        AppError::out_of_range(message)
    };
    error.with_details(json!({ "errors": validation.errors }))
}

/// Turn a first intake draft into a completed record.
///
/// # Errors
///
/// Returns `MissingRequiredField` with the validation messages under
/// `details.errors` when any answer is missing.
pub fn complete_first_intake(
    draft: &FirstIntakeDraft,
    completed_at: DateTime<Utc>,
) -> AppResult<FirstIntakeData> {
    match (draft.gender, draft.main_goal, draft.workout_location) {
        (Some(gender), Some(main_goal), Some(workout_location)) => Ok(FirstIntakeData {
            gender,
            main_goal,
            workout_location,
            completed_at,
        }),
        _ => Err(incomplete("First", true, &validate_first_intake(draft))),
    }
}

/// Turn a second intake draft into a completed record.
///
/// An unanswered injuries step is recorded as "no injuries".
///
/// # Errors
///
/// Returns the validation messages under `details.errors`, coded
/// `MissingRequiredField` when any answer is absent and `ValueOutOfRange`
/// when every answer is present but one is outside its range.
pub fn complete_second_intake(
    draft: &SecondIntakeDraft,
    completed_at: DateTime<Utc>,
) -> AppResult<SecondIntakeData> {
    let validation = validate_second_intake(draft);
    match (
        draft.age,
        draft.weight_kg,
        draft.height_cm,
        draft.experience_level,
        draft.workout_frequency,
    ) {
        (
            Some(age),
            Some(weight_kg),
            Some(height_cm),
            Some(experience_level),
            Some(workout_frequency),
        ) => {
            if !validation.is_valid {
                return Err(incomplete("Second", false, &validation));
            }
            Ok(SecondIntakeData {
                age,
                weight_kg,
                height_cm,
                experience_level,
                workout_frequency,
                injuries: draft.injuries.clone().unwrap_or_default(),
                completed_at,
            })
        }
        _ => Err(incomplete("Second", true, &validation)),
    }
}

/// The full questionnaire is reserved for paid tiers
#[must_use]
pub const fn can_access_second_intake(tier: SubscriptionTier) -> bool {
    tier.is_paid()
}

/// Training days per week used to generate the starter plan.
///
/// Freemium users always get the default; paid users get their request
/// clamped to the supported frequency range, or the default when unset.
#[must_use]
pub fn effective_training_days(tier: SubscriptionTier, requested: Option<u32>) -> u32 {
    if !tier.is_paid() {
        return DEFAULT_TRAINING_DAYS;
    }
    requested.map_or(DEFAULT_TRAINING_DAYS, |days| {
        days.clamp(FREQUENCY_MIN, FREQUENCY_MAX)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, Gender, MainGoal, WorkoutLocation};

    #[test]
    fn test_non_finite_weight_rejected() {
        let draft = SecondIntakeDraft {
            age: Some(30),
            weight_kg: Some(f64::NAN),
            height_cm: Some(175.0),
            experience_level: Some(ExperienceLevel::Beginner),
            workout_frequency: Some(3),
            injuries: None,
        };
        let validation = validate_second_intake(&draft);
        assert!(!validation.is_valid);
        assert_eq!(validation.errors.len(), 1);
        assert!(validation.errors[0].contains("weight"));
    }

    #[test]
    fn test_complete_first_intake_stamps_time() {
        let draft = FirstIntakeDraft {
            gender: Some(Gender::Other),
            main_goal: Some(MainGoal::GeneralFitness),
            workout_location: Some(WorkoutLocation::Gym),
        };
        let now = Utc::now();
        let record = complete_first_intake(&draft, now).unwrap();
        assert_eq!(record.completed_at, now);
        assert_eq!(record.main_goal, MainGoal::GeneralFitness);
    }

    #[test]
    fn test_training_days_policy() {
        assert_eq!(effective_training_days(SubscriptionTier::Freemium, Some(6)), 3);
        assert_eq!(effective_training_days(SubscriptionTier::Premium, None), 3);
        assert_eq!(effective_training_days(SubscriptionTier::Premium, Some(5)), 5);
        assert_eq!(effective_training_days(SubscriptionTier::SmartPremium, Some(9)), 6);
        assert_eq!(effective_training_days(SubscriptionTier::SmartPremium, Some(1)), 2);
    }
}
