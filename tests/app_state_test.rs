// ABOUTME: Integration tests for persisted app state over both store backends
// ABOUTME: Covers flags, the Freemium-to-paid nutrition flow and JSON file persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::fixed_now;
use fitcoach::constants::storage_keys;
use fitcoach::errors::ErrorCode;
use fitcoach::i18n::Language;
use fitcoach::models::SubscriptionTier;
use fitcoach::nutrition::ExpiryCalculator;
use fitcoach::quota::initialize_quota;
use fitcoach::state::{AppState, NutritionEntry};
use fitcoach::storage::{InMemoryStore, JsonFileStore, KeyValueStore};
use tempfile::TempDir;

const USER: &str = "+966501234567";

fn memory_state() -> AppState<InMemoryStore> {
    common::init_test_logging();
    AppState::new(InMemoryStore::new())
}

#[test]
fn test_flags_default_to_false_and_stick() {
    let state = memory_state();
    assert!(!state.workout_intro_seen().unwrap());
    assert!(!state.exercise_seen("squat").unwrap());

    state.mark_workout_intro_seen().unwrap();
    state.mark_exercise_seen("squat").unwrap();
    state.mark_first_intake_completed(USER).unwrap();

    assert!(state.workout_intro_seen().unwrap());
    assert!(!state.nutrition_intro_seen().unwrap());
    assert!(state.exercise_seen("squat").unwrap());
    assert!(!state.exercise_seen("lunge").unwrap());
    assert!(state.first_intake_completed(USER).unwrap());
    assert!(!state.first_intake_completed("someone-else").unwrap());
    assert!(!state.second_intake_completed(USER).unwrap());
}

#[test]
fn test_language_preference() {
    let state = memory_state();
    assert_eq!(state.language().unwrap(), None);

    state.set_language(Language::Ar).unwrap();
    assert_eq!(state.language().unwrap(), Some(Language::Ar));
    assert_eq!(
        state.store().get(storage_keys::LANGUAGE).unwrap().as_deref(),
        Some("ar")
    );
}

#[test]
fn test_unknown_stored_language_is_ignored() {
    let store = InMemoryStore::with_entries([(storage_keys::LANGUAGE, "fr")]);
    let state = AppState::new(store);
    assert_eq!(state.language().unwrap(), None);
}

#[test]
fn test_freemium_visit_then_upgrade_shows_welcome() {
    let state = memory_state();

    assert_eq!(
        state.nutrition_entry(USER, SubscriptionTier::Freemium).unwrap(),
        NutritionEntry::Locked
    );
    assert!(state.was_freemium(USER).unwrap());

    assert_eq!(
        state.nutrition_entry(USER, SubscriptionTier::Premium).unwrap(),
        NutritionEntry::Welcome
    );
    assert!(state.pending_nutrition_intake(USER).unwrap());
    assert!(!state.was_freemium(USER).unwrap());

    state.complete_nutrition_preferences(USER).unwrap();
    assert!(!state.pending_nutrition_intake(USER).unwrap());
    assert_eq!(
        state.nutrition_entry(USER, SubscriptionTier::Premium).unwrap(),
        NutritionEntry::Tracking
    );
}

#[test]
fn test_new_paid_user_goes_to_preferences() {
    let state = memory_state();
    assert_eq!(
        state.nutrition_entry(USER, SubscriptionTier::SmartPremium).unwrap(),
        NutritionEntry::PreferencesIntake
    );
}

#[test]
fn test_upgrade_marks_intake_pending_and_unlocks_plan() {
    let state = memory_state();
    let mut plan = ExpiryCalculator::default().create_plan(SubscriptionTier::Freemium, fixed_now());
    plan.is_locked = true;
    state.save_nutrition_plan(USER, &plan).unwrap();

    let pending = state
        .handle_subscription_upgrade(USER, SubscriptionTier::Freemium, SubscriptionTier::Premium)
        .unwrap();
    assert!(pending);
    assert!(state.pending_nutrition_intake(USER).unwrap());

    let stored = state.nutrition_plan(USER).unwrap().unwrap();
    assert_eq!(stored.id, plan.id);
    assert!(!stored.is_locked);
    assert_eq!(stored.expires_at, None);

    assert_eq!(
        state.nutrition_entry(USER, SubscriptionTier::Premium).unwrap(),
        NutritionEntry::Welcome
    );
}

#[test]
fn test_upgrade_is_noop_between_paid_tiers_and_on_downgrade() {
    let state = memory_state();
    assert!(!state
        .handle_subscription_upgrade(USER, SubscriptionTier::Premium, SubscriptionTier::SmartPremium)
        .unwrap());
    assert!(!state
        .handle_subscription_upgrade(USER, SubscriptionTier::Premium, SubscriptionTier::Freemium)
        .unwrap());
    assert!(!state.pending_nutrition_intake(USER).unwrap());
}

#[test]
fn test_upgrade_after_completed_preferences_is_not_pending() {
    let state = memory_state();
    state.complete_nutrition_preferences(USER).unwrap();
    assert!(!state
        .handle_subscription_upgrade(USER, SubscriptionTier::Freemium, SubscriptionTier::Premium)
        .unwrap());
}

#[test]
fn test_quota_usage_round_trips_through_store() {
    let state = memory_state();
    assert!(state.quota_usage(USER).unwrap().is_none());

    let mut usage = initialize_quota(SubscriptionTier::Premium, fixed_now());
    usage.messages_used = 42;
    state.save_quota_usage(USER, &usage).unwrap();
    assert_eq!(state.quota_usage(USER).unwrap(), Some(usage));
}

#[test]
fn test_file_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("state.json");

    {
        let state = AppState::new(JsonFileStore::open(&path).unwrap());
        state.set_language(Language::Ar).unwrap();
        state.mark_second_intake_completed(USER).unwrap();
        state
            .save_nutrition_plan(
                USER,
                &ExpiryCalculator::default().create_plan(SubscriptionTier::Freemium, fixed_now()),
            )
            .unwrap();
    }

    let state = AppState::new(JsonFileStore::open(&path).unwrap());
    assert_eq!(state.language().unwrap(), Some(Language::Ar));
    assert!(state.second_intake_completed(USER).unwrap());
    assert!(state.nutrition_plan(USER).unwrap().is_some());

    let keys = state.store().keys().unwrap();
    assert!(keys.contains(&storage_keys::LANGUAGE.to_owned()));
}

#[test]
fn test_file_store_remove_is_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let store = JsonFileStore::open(&path).unwrap();
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();
    store.remove("a").unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("a").unwrap(), None);
    assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));
    assert!(reopened.contains("b").unwrap());
}

#[test]
fn test_corrupt_state_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = JsonFileStore::open(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_boxed_store_behaves_like_inner() {
    let store: Box<dyn KeyValueStore> = Box::new(InMemoryStore::new());
    let state = AppState::new(store);
    state.mark_nutrition_intro_seen().unwrap();
    assert!(state.nutrition_intro_seen().unwrap());
}
