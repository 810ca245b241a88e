// ABOUTME: Core data models for the FitCoach application logic
// ABOUTME: Re-exports tier, quota, intake, phone and nutrition types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data shared by the validators and calculators.

/// Subscription tiers
pub mod tier;

/// Per-tier quota limits and usage counters
pub mod quota;

/// Two-stage onboarding intake records and drafts
pub mod intake;

/// Supported countries and phone validation results
pub mod phone;

/// Nutrition plans and expiry status
pub mod nutrition;

pub use intake::{
    ExperienceLevel, FirstIntakeData, FirstIntakeDraft, Gender, InjuryArea, IntakeValidation,
    MainGoal, SecondIntakeData, SecondIntakeDraft, WorkoutLocation,
};
pub use nutrition::{ExpiryPhase, NutritionExpiryStatus, NutritionPlan};
pub use phone::{Country, PhoneValidationError, PhoneValidationResult};
pub use quota::{MessageLimit, QuotaAction, QuotaCheckResult, QuotaLimits, QuotaUsage};
pub use tier::SubscriptionTier;
