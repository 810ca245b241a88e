// ABOUTME: Shared test utilities for fitcoach integration tests
// ABOUTME: Provides quiet logging setup, fixed clocks and prebuilt intake drafts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitcoach`
//!
//! Every helper that depends on time takes an explicit instant, so tests
//! build their clocks from `fixed_now`.

use chrono::{DateTime, Duration, Utc};
use fitcoach::models::{
    ExperienceLevel, FirstIntakeDraft, Gender, InjuryArea, MainGoal, SecondIntakeDraft,
    WorkoutLocation,
};
use std::collections::BTreeSet;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Parse an RFC 3339 instant
pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

/// Reference "now" used across the suite
pub fn fixed_now() -> DateTime<Utc> {
    at("2025-06-15T12:00:00Z")
}

/// `fixed_now` minus whole days
pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

/// First intake with every step answered
pub fn complete_first_draft() -> FirstIntakeDraft {
    FirstIntakeDraft {
        gender: Some(Gender::Female),
        main_goal: Some(MainGoal::MuscleGain),
        workout_location: Some(WorkoutLocation::Home),
    }
}

/// Second intake with every step answered and in range
pub fn complete_second_draft() -> SecondIntakeDraft {
    SecondIntakeDraft {
        age: Some(28),
        weight_kg: Some(64.5),
        height_cm: Some(168.0),
        experience_level: Some(ExperienceLevel::Beginner),
        workout_frequency: Some(4),
        injuries: Some(BTreeSet::from([InjuryArea::Knee])),
    }
}
