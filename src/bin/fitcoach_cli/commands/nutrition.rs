// ABOUTME: Nutrition commands for fitcoach-cli
// ABOUTME: Compute plan expiry status with its message and banner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitcoach::config::AppConfig;
use fitcoach::errors::AppResult;
use fitcoach::i18n::Translator;
use fitcoach::models::SubscriptionTier;
use fitcoach::nutrition::{format_expiry_message, ExpiryBanner, ExpiryCalculator};
use serde_json::json;

use crate::helpers::args;
use crate::helpers::display::print_json;

/// Print the expiry status of a plan created at `created_at`
pub fn status(
    config: &AppConfig,
    tier: &str,
    created_at: &str,
    now: Option<&str>,
    window_days: Option<u32>,
    language: Option<&str>,
) -> AppResult<()> {
    let tier: SubscriptionTier = tier.parse()?;
    let created_at = args::timestamp(created_at)?;
    let now = args::timestamp_or_now(now)?;
    let calculator =
        window_days.map_or_else(|| config.expiry_calculator(), ExpiryCalculator::with_window_days);
    let translator = Translator::new(args::language(config, language)?);

    let status = calculator.compute(created_at, tier, now);
    print_json(&json!({
        "tier": tier,
        "window_days": calculator.window_days(),
        "status": status,
        "phase": status.phase(),
        "can_access": status.can_access(),
        "message": format_expiry_message(&status),
        "banner": ExpiryBanner::for_status(&status, tier, &translator),
    }))
}
