// ABOUTME: Core types and constants for the FitCoach application logic
// ABOUTME: Foundation crate with error handling, subscription tiers, intake, phone and nutrition models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitCoach Core
//!
//! Foundation crate providing shared types and constants for the FitCoach
//! application logic. Everything here is plain data: the validators,
//! calculators and state handling that operate on it live in the `fitcoach`
//! crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Policy values (intake ranges, nutrition windows, quota limits, storage keys)
//! - **models**: Subscription tiers, quotas, intake records, phone results, nutrition plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (tiers, quotas, intake, phone, nutrition)
pub mod models;
