// ABOUTME: Key names and key builders for persisted demo-mode flags
// ABOUTME: Global keys are constants, per-user and per-exercise keys are built from a prefix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Selected UI language
pub const LANGUAGE: &str = "fitcoach_language";
/// Workout intro carousel dismissed
pub const WORKOUT_INTRO_SEEN: &str = "workout_intro_seen";
/// Nutrition intro carousel dismissed
pub const NUTRITION_INTRO_SEEN: &str = "nutrition_intro_seen";

/// Prefix for per-exercise "seen" flags
pub const EXERCISE_SEEN_PREFIX: &str = "exercise_seen_";
/// Prefix for per-user first intake completion
pub const FIRST_INTAKE_COMPLETED_PREFIX: &str = "first_intake_completed_";
/// Prefix for per-user second intake completion
pub const SECOND_INTAKE_COMPLETED_PREFIX: &str = "second_intake_completed_";
/// Prefix for per-user nutrition preferences completion
pub const NUTRITION_PREFERENCES_COMPLETED_PREFIX: &str = "nutrition_preferences_completed_";
/// Prefix for per-user pending nutrition intake after an upgrade
pub const PENDING_NUTRITION_INTAKE_PREFIX: &str = "pending_nutrition_intake_";
/// Prefix for per-user "was on Freemium" marker
pub const WAS_FREEMIUM_PREFIX: &str = "was_freemium_";
/// Prefix for the per-user nutrition plan, stored as JSON
pub const NUTRITION_PLAN_PREFIX: &str = "nutrition_plan_";
/// Prefix for the per-user quota usage, stored as JSON
pub const QUOTA_USAGE_PREFIX: &str = "quota_usage_";

/// Value stored for a set boolean flag
pub const FLAG_TRUE: &str = "true";

/// Build a scoped key from a prefix and an identifier
#[must_use]
pub fn scoped(prefix: &str, id: &str) -> String {
    format!("{prefix}{id}")
}
