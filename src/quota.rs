// ABOUTME: Monthly message, video call and attachment quota checks per subscription tier
// ABOUTME: Usage periods start at the first day of each calendar month in UTC
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::quota::WARNING_THRESHOLD_PERCENT;
use crate::models::{MessageLimit, QuotaAction, QuotaCheckResult, QuotaUsage, SubscriptionTier};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use tracing::{debug, info, trace};

/// Whether `action` is allowed under `tier` given the current `usage`
#[must_use]
pub fn check_quota(
    tier: SubscriptionTier,
    usage: &QuotaUsage,
    action: QuotaAction,
) -> QuotaCheckResult {
    let limits = tier.limits();

    let result = match action {
        QuotaAction::Message => match limits.messages {
            MessageLimit::Unlimited => {
                trace!(tier = tier.as_str(), "Unlimited messages");
                QuotaCheckResult::unmetered()
            }
            MessageLimit::Limited(total) => {
                metered(usage.messages_used, total, "Message quota exceeded")
            }
        },
        QuotaAction::Call => metered(usage.calls_used, limits.calls, "Video call quota exceeded"),
        QuotaAction::Attachment if limits.chat_attachments => QuotaCheckResult::unmetered(),
        QuotaAction::Attachment => {
            QuotaCheckResult::denied("Attachments require Premium subscription", None)
        }
    };

    if !result.allowed {
        debug!(tier = tier.as_str(), ?action, reason = ?result.reason, "Quota check denied");
    }
    result
}

fn metered(used: u32, total: u32, exceeded: &str) -> QuotaCheckResult {
    let remaining = total.saturating_sub(used);
    if remaining == 0 {
        return QuotaCheckResult::denied(exceeded, Some(0));
    }
    let threshold = u64::from(total) * u64::from(WARNING_THRESHOLD_PERCENT);
    QuotaCheckResult {
        allowed: true,
        reason: None,
        remaining: Some(remaining),
        show_warning: u64::from(used) * 100 >= threshold,
    }
}

/// Check `action` and count it when allowed
pub fn consume(
    tier: SubscriptionTier,
    usage: &mut QuotaUsage,
    action: QuotaAction,
) -> QuotaCheckResult {
    let result = check_quota(tier, usage, action);
    if result.allowed {
        usage.record(action);
    }
    result
}

/// Fresh usage counters for `tier`
#[must_use]
pub fn initialize_quota(tier: SubscriptionTier, now: DateTime<Utc>) -> QuotaUsage {
    let limits = tier.limits();
    QuotaUsage {
        messages_used: 0,
        messages_total: limits.messages,
        calls_used: 0,
        calls_total: limits.calls,
        reset_date: next_reset_date(now),
    }
}

/// Midnight UTC on the first day of the month after `now`
#[must_use]
pub fn next_reset_date(now: DateTime<Utc>) -> DateTime<Utc> {
    let (year, month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map_or(now, |midnight| Utc.from_utc_datetime(&midnight))
}

/// Start a new period when `now` has reached the reset date.
///
/// Totals are refreshed from `tier` so a plan change takes effect at the
/// next period. Returns whether a reset happened.
pub fn reset_if_due(usage: &mut QuotaUsage, tier: SubscriptionTier, now: DateTime<Utc>) -> bool {
    if now < usage.reset_date {
        return false;
    }
    let limits = tier.limits();
    usage.messages_total = limits.messages;
    usage.calls_total = limits.calls;
    usage.reset(next_reset_date(now));
    info!(tier = tier.as_str(), reset_date = %usage.reset_date, "Quota period reset");
    true
}
