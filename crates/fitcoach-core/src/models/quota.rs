// ABOUTME: Per-tier quota limits, monthly usage counters and quota check results
// ABOUTME: Limits table for messages, video calls, attachments and nutrition persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{nutrition, quota};
use crate::models::tier::SubscriptionTier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Monthly message allowance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLimit {
    /// At most this many messages per month
    Limited(u32),
    /// No cap
    Unlimited,
}

/// Feature limits attached to a subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaLimits {
    /// Coach messages per month
    pub messages: MessageLimit,
    /// Video calls per month
    pub calls: u32,
    /// Maximum video call length in minutes
    pub call_duration_minutes: u32,
    /// Whether chat attachments are allowed
    pub chat_attachments: bool,
    /// Whether nutrition plans persist without expiring
    pub nutrition_persistent: bool,
    /// Nutrition plan validity in days, `None` when persistent
    pub nutrition_window_days: Option<u32>,
}

impl QuotaLimits {
    /// Limits table
    #[must_use]
    pub const fn for_tier(tier: SubscriptionTier) -> Self {
        match tier {
            SubscriptionTier::Freemium => Self {
                messages: MessageLimit::Limited(quota::FREEMIUM_MESSAGES),
                calls: quota::FREEMIUM_CALLS,
                call_duration_minutes: quota::FREEMIUM_CALL_MINUTES,
                chat_attachments: false,
                nutrition_persistent: false,
                nutrition_window_days: Some(nutrition::FREEMIUM_WINDOW_DAYS),
            },
            SubscriptionTier::Premium => Self {
                messages: MessageLimit::Limited(quota::PREMIUM_MESSAGES),
                calls: quota::PREMIUM_CALLS,
                call_duration_minutes: quota::PAID_CALL_MINUTES,
                chat_attachments: true,
                nutrition_persistent: true,
                nutrition_window_days: None,
            },
            SubscriptionTier::SmartPremium => Self {
                messages: MessageLimit::Unlimited,
                calls: quota::SMART_PREMIUM_CALLS,
                call_duration_minutes: quota::PAID_CALL_MINUTES,
                chat_attachments: true,
                nutrition_persistent: true,
                nutrition_window_days: None,
            },
        }
    }
}

/// Action that consumes or requires quota
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaAction {
    /// Send a coach message
    Message,
    /// Book a video call
    Call,
    /// Attach a file to a chat message
    Attachment,
}

/// Usage counters for the current monthly period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaUsage {
    /// Messages sent this period
    pub messages_used: u32,
    /// Message allowance for this period
    pub messages_total: MessageLimit,
    /// Calls booked this period
    pub calls_used: u32,
    /// Call allowance for this period
    pub calls_total: u32,
    /// Start of the next period
    pub reset_date: DateTime<Utc>,
}

impl QuotaUsage {
    /// Count one use of `action`; attachments have no counter
    pub fn record(&mut self, action: QuotaAction) {
        match action {
            QuotaAction::Message => self.messages_used = self.messages_used.saturating_add(1),
            QuotaAction::Call => self.calls_used = self.calls_used.saturating_add(1),
            QuotaAction::Attachment => {}
        }
    }

    /// Zero the counters and move the period boundary
    pub fn reset(&mut self, next_reset: DateTime<Utc>) {
        self.messages_used = 0;
        self.calls_used = 0;
        self.reset_date = next_reset;
    }
}

/// Outcome of a quota check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaCheckResult {
    /// Whether the action may proceed
    pub allowed: bool,
    /// Why the action was refused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Remaining allowance after this check, when the action is counted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,
    /// True once usage reaches the warning threshold
    pub show_warning: bool,
}

impl QuotaCheckResult {
    /// Allowed with no counter involved
    #[must_use]
    pub const fn unmetered() -> Self {
        Self {
            allowed: true,
            reason: None,
            remaining: None,
            show_warning: false,
        }
    }

    /// Refused with a reason
    pub fn denied(reason: impl Into<String>, remaining: Option<u32>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
            remaining,
            show_warning: false,
        }
    }
}
