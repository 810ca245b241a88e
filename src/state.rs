// ABOUTME: Typed application state over a key-value store
// ABOUTME: Language preference, onboarding flags and the post-upgrade nutrition flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::storage_keys::{
    self, scoped, EXERCISE_SEEN_PREFIX, FIRST_INTAKE_COMPLETED_PREFIX, FLAG_TRUE,
    NUTRITION_PLAN_PREFIX, NUTRITION_PREFERENCES_COMPLETED_PREFIX,
    PENDING_NUTRITION_INTAKE_PREFIX, QUOTA_USAGE_PREFIX, SECOND_INTAKE_COMPLETED_PREFIX,
    WAS_FREEMIUM_PREFIX,
};
use crate::errors::AppResult;
use crate::i18n::Language;
use crate::models::{NutritionPlan, QuotaUsage, SubscriptionTier};
use crate::nutrition::unlock_plan;
use crate::storage::{get_json, set_json, KeyValueStore};
use serde::Serialize;
use tracing::{info, warn};

/// Screen to show when the user opens the nutrition tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionEntry {
    /// Freemium users see the locked preview
    Locked,
    /// Just upgraded; greet before asking for preferences
    Welcome,
    /// Paid user who has not answered the preferences intake
    PreferencesIntake,
    /// Preferences known; show the tracker
    Tracking,
}

/// Persisted app state for one device
///
/// Per-user flags are keyed by the user's phone number, matching how the
/// mobile app scopes them.
#[derive(Debug)]
pub struct AppState<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AppState<S> {
    /// Wrap `store`
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Release the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    fn flag(&self, key: &str) -> AppResult<bool> {
        Ok(self.store.get(key)?.as_deref() == Some(FLAG_TRUE))
    }

    fn set_flag(&self, key: &str) -> AppResult<()> {
        self.store.set(key, FLAG_TRUE)
    }

    /// Saved language preference.
    ///
    /// An unrecognised stored value is treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub fn language(&self) -> AppResult<Option<Language>> {
        let Some(raw) = self.store.get(storage_keys::LANGUAGE)? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(language) => Ok(Some(language)),
            Err(e) => {
                warn!(value = %raw, error = %e, "Ignoring stored language");
                Ok(None)
            }
        }
    }

    /// Save the language preference
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn set_language(&self, language: Language) -> AppResult<()> {
        self.store.set(storage_keys::LANGUAGE, language.code())
    }

    /// Whether the workout intro has been dismissed
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub fn workout_intro_seen(&self) -> AppResult<bool> {
        self.flag(storage_keys::WORKOUT_INTRO_SEEN)
    }

    /// Record that the workout intro has been dismissed
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn mark_workout_intro_seen(&self) -> AppResult<()> {
        self.set_flag(storage_keys::WORKOUT_INTRO_SEEN)
    }

    /// Whether the nutrition intro has been dismissed
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub fn nutrition_intro_seen(&self) -> AppResult<bool> {
        self.flag(storage_keys::NUTRITION_INTRO_SEEN)
    }

    /// Record that the nutrition intro has been dismissed
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn mark_nutrition_intro_seen(&self) -> AppResult<()> {
        self.set_flag(storage_keys::NUTRITION_INTRO_SEEN)
    }

    /// Whether the demo for `exercise_id` has been shown
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub fn exercise_seen(&self, exercise_id: &str) -> AppResult<bool> {
        self.flag(&scoped(EXERCISE_SEEN_PREFIX, exercise_id))
    }

    /// Record that the demo for `exercise_id` has been shown
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn mark_exercise_seen(&self, exercise_id: &str) -> AppResult<()> {
        self.set_flag(&scoped(EXERCISE_SEEN_PREFIX, exercise_id))
    }

    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub fn first_intake_completed(&self, user: &str) -> AppResult<bool> {
        self.flag(&scoped(FIRST_INTAKE_COMPLETED_PREFIX, user))
    }

    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn mark_first_intake_completed(&self, user: &str) -> AppResult<()> {
        info!(user, "First intake completed");
        self.set_flag(&scoped(FIRST_INTAKE_COMPLETED_PREFIX, user))
    }

    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub fn second_intake_completed(&self, user: &str) -> AppResult<bool> {
        self.flag(&scoped(SECOND_INTAKE_COMPLETED_PREFIX, user))
    }

    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn mark_second_intake_completed(&self, user: &str) -> AppResult<()> {
        info!(user, "Second intake completed");
        self.set_flag(&scoped(SECOND_INTAKE_COMPLETED_PREFIX, user))
    }

    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub fn nutrition_preferences_completed(&self, user: &str) -> AppResult<bool> {
        self.flag(&scoped(NUTRITION_PREFERENCES_COMPLETED_PREFIX, user))
    }

    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub fn pending_nutrition_intake(&self, user: &str) -> AppResult<bool> {
        self.flag(&scoped(PENDING_NUTRITION_INTAKE_PREFIX, user))
    }

    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub fn was_freemium(&self, user: &str) -> AppResult<bool> {
        self.flag(&scoped(WAS_FREEMIUM_PREFIX, user))
    }

    /// Decide which nutrition screen to show.
    ///
    /// Opening the tab on Freemium records that the user was on Freemium, so
    /// a later visit on a paid tier routes through the welcome screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written
    pub fn nutrition_entry(&self, user: &str, tier: SubscriptionTier) -> AppResult<NutritionEntry> {
        if !tier.is_paid() {
            self.set_flag(&scoped(WAS_FREEMIUM_PREFIX, user))?;
            return Ok(NutritionEntry::Locked);
        }

        if self.nutrition_preferences_completed(user)? {
            return Ok(NutritionEntry::Tracking);
        }

        if self.was_freemium(user)? {
            self.set_flag(&scoped(PENDING_NUTRITION_INTAKE_PREFIX, user))?;
            self.store.remove(&scoped(WAS_FREEMIUM_PREFIX, user))?;
            info!(user, tier = tier.as_str(), "Upgrade detected, nutrition intake pending");
            return Ok(NutritionEntry::Welcome);
        }

        if self.pending_nutrition_intake(user)? {
            return Ok(NutritionEntry::Welcome);
        }

        Ok(NutritionEntry::PreferencesIntake)
    }

    /// Apply a subscription change.
    ///
    /// Moving from Freemium to a paid tier without completed preferences
    /// marks the nutrition intake as pending. Any stored plan is unlocked.
    /// Returns whether the intake is now pending.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written
    pub fn handle_subscription_upgrade(
        &self,
        user: &str,
        from: SubscriptionTier,
        to: SubscriptionTier,
    ) -> AppResult<bool> {
        if from.is_paid() || !to.is_paid() {
            return Ok(false);
        }

        info!(user, from = from.as_str(), to = to.as_str(), "Subscription upgraded");
        self.store.remove(&scoped(WAS_FREEMIUM_PREFIX, user))?;

        if let Some(plan) = self.nutrition_plan(user)? {
            self.save_nutrition_plan(user, &unlock_plan(&plan))?;
        }

        if self.nutrition_preferences_completed(user)? {
            return Ok(false);
        }
        self.set_flag(&scoped(PENDING_NUTRITION_INTAKE_PREFIX, user))?;
        Ok(true)
    }

    /// Record completed nutrition preferences and clear the pending intake
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn complete_nutrition_preferences(&self, user: &str) -> AppResult<()> {
        self.set_flag(&scoped(NUTRITION_PREFERENCES_COMPLETED_PREFIX, user))?;
        self.store
            .remove(&scoped(PENDING_NUTRITION_INTAKE_PREFIX, user))?;
        info!(user, "Nutrition preferences completed");
        Ok(())
    }

    /// Stored nutrition plan
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds invalid JSON
    pub fn nutrition_plan(&self, user: &str) -> AppResult<Option<NutritionPlan>> {
        get_json(&self.store, &scoped(NUTRITION_PLAN_PREFIX, user))
    }

    /// Replace the stored nutrition plan
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn save_nutrition_plan(&self, user: &str, plan: &NutritionPlan) -> AppResult<()> {
        set_json(&self.store, &scoped(NUTRITION_PLAN_PREFIX, user), plan)
    }

    /// Stored quota usage for the current period
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds invalid JSON
    pub fn quota_usage(&self, user: &str) -> AppResult<Option<QuotaUsage>> {
        get_json(&self.store, &scoped(QUOTA_USAGE_PREFIX, user))
    }

    /// Replace the stored quota usage
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn save_quota_usage(&self, user: &str, usage: &QuotaUsage) -> AppResult<()> {
        set_json(&self.store, &scoped(QUOTA_USAGE_PREFIX, user), usage)
    }
}
