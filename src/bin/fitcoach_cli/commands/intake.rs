// ABOUTME: Intake commands for fitcoach-cli
// ABOUTME: Validate first and second questionnaire answers and show tier gating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use fitcoach::errors::AppResult;
use fitcoach::models::{
    ExperienceLevel, FirstIntakeDraft, Gender, InjuryArea, MainGoal, SecondIntakeDraft,
    SubscriptionTier, WorkoutLocation,
};
use fitcoach::validation::{
    can_access_second_intake, complete_first_intake, complete_second_intake,
    effective_training_days, validate_first_intake, validate_second_intake,
};
use serde_json::json;
use std::collections::BTreeSet;

use crate::helpers::args;
use crate::helpers::display::print_json;

/// Raw second intake answers from the command line
pub struct SecondAnswers {
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub experience: Option<String>,
    pub frequency: Option<u32>,
    pub injuries: Option<String>,
}

/// Validate first intake answers
pub fn first(gender: Option<&str>, goal: Option<&str>, location: Option<&str>) -> AppResult<()> {
    let draft = FirstIntakeDraft {
        gender: gender.map(str::parse::<Gender>).transpose()?,
        main_goal: goal.map(str::parse::<MainGoal>).transpose()?,
        workout_location: location.map(str::parse::<WorkoutLocation>).transpose()?,
    };

    let validation = validate_first_intake(&draft);
    let record = complete_first_intake(&draft, Utc::now()).ok();
    print_json(&json!({
        "answered_steps": draft.answered_steps(),
        "total_steps": draft.total_steps(),
        "validation": validation,
        "record": record,
    }))
}

/// Validate second intake answers for a user on `tier`
pub fn second(tier: &str, answers: &SecondAnswers) -> AppResult<()> {
    let tier: SubscriptionTier = tier.parse()?;
    let draft = SecondIntakeDraft {
        age: answers.age,
        weight_kg: answers.weight,
        height_cm: answers.height,
        experience_level: answers
            .experience
            .as_deref()
            .map(str::parse::<ExperienceLevel>)
            .transpose()?,
        workout_frequency: answers.frequency,
        injuries: answers
            .injuries
            .as_deref()
            .map(args::list::<InjuryArea>)
            .transpose()?
            .map(|areas| areas.into_iter().collect::<BTreeSet<_>>()),
    };

    let validation = validate_second_intake(&draft);
    let record = complete_second_intake(&draft, Utc::now()).ok();
    print_json(&json!({
        "tier": tier,
        "can_access": can_access_second_intake(tier),
        "training_days": effective_training_days(tier, draft.workout_frequency),
        "answered_steps": draft.answered_steps(),
        "total_steps": draft.total_steps(),
        "validation": validation,
        "record": record,
    }))
}
