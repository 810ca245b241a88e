// ABOUTME: Quota commands for fitcoach-cli
// ABOUTME: Check a message, call or attachment against a tier's monthly allowance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use fitcoach::errors::AppResult;
use fitcoach::models::{QuotaAction, SubscriptionTier};
use fitcoach::quota::{check_quota, initialize_quota};
use serde_json::json;

use crate::helpers::display::print_json;

/// Check `action` for a user who has already used the given counts
pub fn check(tier: &str, action: QuotaAction, messages_used: u32, calls_used: u32) -> AppResult<()> {
    let tier: SubscriptionTier = tier.parse()?;
    let mut usage = initialize_quota(tier, Utc::now());
    usage.messages_used = messages_used;
    usage.calls_used = calls_used;

    print_json(&json!({
        "tier": tier,
        "action": action,
        "limits": tier.limits(),
        "usage": usage,
        "result": check_quota(tier, &usage, action),
    }))
}
