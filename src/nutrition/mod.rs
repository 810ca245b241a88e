// ABOUTME: Nutrition plan access for Freemium time windows and persistent paid plans
// ABOUTME: Expiry computation, plan lifecycle and the translated expiry banner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Expiry banner content
pub mod banner;

/// Expiry computation and plan lifecycle
pub mod expiry;

pub use banner::{BannerAction, ExpiryBanner};
pub use expiry::{compute_expiry_status, format_expiry_message, unlock_plan, ExpiryCalculator};
