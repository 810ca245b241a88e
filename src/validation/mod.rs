// ABOUTME: Validation module for user-typed onboarding input
// ABOUTME: Phone numbers and two-stage intake questionnaires, reported as data rather than errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Validators in this module are total: they never panic and never return
//! `Err`. Callers inspect the returned report and decide what to show.

/// Intake questionnaire validation and completion
pub mod intake;

/// Phone number normalization, validation and display
pub mod phone;

pub use intake::{
    can_access_second_intake, complete_first_intake, complete_second_intake,
    effective_training_days, validate_first_intake, validate_second_intake,
};
pub use phone::{format_phone_for_display, mask_phone, validate_phone_number};
