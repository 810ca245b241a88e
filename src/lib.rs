// ABOUTME: Main library entry point for the FitCoach application logic
// ABOUTME: Validation, nutrition expiry, quotas, injury rules, i18n and persisted app state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitCoach
//!
//! The logic layer behind the FitCoach mobile screens. Every helper here is
//! synchronous and side-effect free apart from the state store; anything that
//! depends on the clock takes `now` as a parameter.
//!
//! ## Architecture
//!
//! - **validation**: phone numbers and the two-stage onboarding intake
//! - **nutrition**: plan expiry for Freemium users and the expiry banner
//! - **quota**: monthly messaging / video-call allowances per tier
//! - **injuries**: exercise substitution rules for reported injuries
//! - **i18n**: enumerated translation keys with raw-key fallback
//! - **storage** / **state**: key-value persistence and typed app flags
//! - **config** / **logging**: environment configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use fitcoach::models::SubscriptionTier;
//! use fitcoach::nutrition::ExpiryCalculator;
//! use fitcoach::validation::phone::validate_phone_number;
//!
//! let phone = validate_phone_number("50 123 4567", "+966");
//! assert_eq!(phone.formatted.as_deref(), Some("+966501234567"));
//!
//! let now = Utc::now();
//! let status = ExpiryCalculator::with_window_days(30)
//!     .compute(now - Duration::days(29), SubscriptionTier::Freemium, now);
//! assert_eq!(status.days_remaining, Some(1));
//! ```

/// Environment-based configuration
pub mod config;

/// Exercise substitution rules for reported injuries
pub mod injuries;

/// Translation keys, catalogs and lookup with raw-key fallback
pub mod i18n;

/// Logging configuration and structured logging setup
pub mod logging;

/// Nutrition plan expiry and display
pub mod nutrition;

/// Monthly quota checks per subscription tier
pub mod quota;

/// Typed application state over a key-value store
pub mod state;

/// Key-value persistence boundary
pub mod storage;

/// Phone and intake validation
pub mod validation;

pub use fitcoach_core::{constants, errors, models};
