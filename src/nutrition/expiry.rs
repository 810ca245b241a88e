// ABOUTME: Nutrition plan expiry computation for time-limited Freemium access
// ABOUTME: Plan lifecycle helpers: create, regenerate, unlock and status lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrition::{FREEMIUM_WINDOW_DAYS, MAX_WINDOW_DAYS};
use crate::models::{NutritionExpiryStatus, NutritionPlan, SubscriptionTier};
use chrono::{DateTime, Duration, Utc};
use tracing::trace;
use uuid::Uuid;

/// Computes plan validity for a fixed Freemium window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryCalculator {
    window_days: u32,
}

impl Default for ExpiryCalculator {
    fn default() -> Self {
        Self::with_window_days(FREEMIUM_WINDOW_DAYS)
    }
}

impl ExpiryCalculator {
    /// Calculator for an explicit window length in days, clamped to
    /// `1..=MAX_WINDOW_DAYS`
    #[must_use]
    pub const fn with_window_days(window_days: u32) -> Self {
        let window_days = if window_days == 0 {
            1
        } else if window_days > MAX_WINDOW_DAYS {
            MAX_WINDOW_DAYS
        } else {
            window_days
        };
        Self { window_days }
    }

    /// Window length in days
    #[must_use]
    pub const fn window_days(&self) -> u32 {
        self.window_days
    }

    fn window(&self) -> Duration {
        Duration::days(i64::from(self.window_days))
    }

    /// Status of a plan generated at `created_at`, observed at `now`.
    ///
    /// Paid tiers never expire. For Freemium the elapsed time is clamped at
    /// zero, so a `created_at` in the future counts as "just created".
    #[must_use]
    pub fn compute(
        &self,
        created_at: DateTime<Utc>,
        tier: SubscriptionTier,
        now: DateTime<Utc>,
    ) -> NutritionExpiryStatus {
        if tier.is_paid() {
            trace!(tier = tier.as_str(), "Persistent nutrition access");
            return NutritionExpiryStatus::unlimited();
        }

        let elapsed = (now - created_at).max(Duration::zero());
        status_from_remaining(self.window() - elapsed)
    }

    /// New plan; Freemium plans expire after the window, paid plans persist
    #[must_use]
    pub fn create_plan(&self, tier: SubscriptionTier, now: DateTime<Utc>) -> NutritionPlan {
        NutritionPlan {
            id: Uuid::new_v4(),
            generated_at: now,
            expires_at: (!tier.is_paid()).then(|| {
                now.checked_add_signed(self.window())
                    .unwrap_or(DateTime::<Utc>::MAX_UTC)
            }),
            is_locked: false,
        }
    }

    /// Replacement plan with a fresh window
    #[must_use]
    pub fn regenerate_plan(&self, tier: SubscriptionTier, now: DateTime<Utc>) -> NutritionPlan {
        self.create_plan(tier, now)
    }

    /// Status of an existing plan, or of the absence of one.
    ///
    /// A missing plan is locked but not expired. A plan flagged locked is
    /// expired regardless of its timestamps. A Freemium plan without an expiry
    /// was unlocked by an earlier upgrade and keeps unlimited access after a
    /// downgrade.
    #[must_use]
    pub fn status_for_plan(
        &self,
        plan: Option<&NutritionPlan>,
        tier: SubscriptionTier,
        now: DateTime<Utc>,
    ) -> NutritionExpiryStatus {
        let Some(plan) = plan else {
            return NutritionExpiryStatus::no_plan();
        };
        if tier.is_paid() {
            return NutritionExpiryStatus::unlimited();
        }
        if plan.is_locked {
            return NutritionExpiryStatus::expired();
        }
        match plan.expires_at {
            Some(expires_at) => status_from_remaining(expires_at - now.max(plan.generated_at)),
            None => NutritionExpiryStatus::unlimited(),
        }
    }
}

fn status_from_remaining(remaining: Duration) -> NutritionExpiryStatus {
    if remaining <= Duration::zero() {
        return NutritionExpiryStatus::expired();
    }

    let days = remaining.num_days();
    NutritionExpiryStatus {
        is_expired: false,
        is_locked: false,
        days_remaining: Some(days),
        hours_remaining: (days == 0).then(|| remaining.num_hours()),
    }
}

/// Status using the default Freemium window
#[must_use]
pub fn compute_expiry_status(
    created_at: DateTime<Utc>,
    tier: SubscriptionTier,
    now: DateTime<Utc>,
) -> NutritionExpiryStatus {
    ExpiryCalculator::default().compute(created_at, tier, now)
}

/// Remove the expiry after an upgrade
#[must_use]
pub fn unlock_plan(plan: &NutritionPlan) -> NutritionPlan {
    NutritionPlan {
        expires_at: None,
        is_locked: false,
        ..plan.clone()
    }
}

/// English summary of a status for logs and the CLI
#[must_use]
pub fn format_expiry_message(status: &NutritionExpiryStatus) -> String {
    if status.is_expired {
        return "Access expired - Upgrade to Premium to unlock".to_owned();
    }
    if status.is_locked {
        return "No nutrition plan generated".to_owned();
    }
    match (status.days_remaining, status.hours_remaining) {
        (Some(0), Some(hours)) => format!("Expires in {hours} hour{}", plural(hours)),
        (Some(days), _) => format!("{days} day{} remaining", plural(days)),
        (None, _) => "Unlimited access".to_owned(),
    }
}

const fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-10T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_hours_only_in_last_day() {
        let now = fixed_now();
        let calculator = ExpiryCalculator::with_window_days(7);

        let created = now - Duration::hours(7 * 24 - 5);
        let last_day = calculator.compute(created, SubscriptionTier::Freemium, now);
        assert_eq!(last_day.days_remaining, Some(0));
        assert_eq!(last_day.hours_remaining, Some(5));

        let created = now - Duration::days(5);
        let two_days = calculator.compute(created, SubscriptionTier::Freemium, now);
        assert_eq!(two_days.days_remaining, Some(2));
        assert_eq!(two_days.hours_remaining, None);
    }

    #[test]
    fn test_exact_window_boundary_is_expired() {
        let now = fixed_now();
        let status = ExpiryCalculator::with_window_days(7).compute(
            now - Duration::days(7),
            SubscriptionTier::Freemium,
            now,
        );
        assert!(status.is_expired);
        assert!(status.is_locked);
    }

    #[test]
    fn test_future_creation_counts_as_fresh() {
        let now = fixed_now();
        let status = ExpiryCalculator::with_window_days(7).compute(
            now + Duration::days(3),
            SubscriptionTier::Freemium,
            now,
        );
        assert_eq!(status.days_remaining, Some(7));
    }

    #[test]
    fn test_window_is_clamped_to_supported_range() {
        assert_eq!(ExpiryCalculator::with_window_days(0).window_days(), 1);
        assert_eq!(
            ExpiryCalculator::with_window_days(u32::MAX).window_days(),
            MAX_WINDOW_DAYS
        );

        let now = fixed_now();
        let plan = ExpiryCalculator::with_window_days(u32::MAX)
            .create_plan(SubscriptionTier::Freemium, now);
        assert_eq!(
            plan.expires_at,
            Some(now + Duration::days(i64::from(MAX_WINDOW_DAYS)))
        );
    }

    #[test]
    fn test_unlocked_freemium_plan_stays_unlimited() {
        let now = fixed_now();
        let plan = unlock_plan(
            &ExpiryCalculator::default().create_plan(SubscriptionTier::Freemium, now),
        );
        let status = ExpiryCalculator::default().status_for_plan(
            Some(&plan),
            SubscriptionTier::Freemium,
            now + Duration::days(30),
        );
        assert_eq!(status, NutritionExpiryStatus::unlimited());
    }

    #[test]
    fn test_message_pluralisation() {
        let one_hour = NutritionExpiryStatus {
            days_remaining: Some(0),
            hours_remaining: Some(1),
            ..NutritionExpiryStatus::unlimited()
        };
        assert_eq!(format_expiry_message(&one_hour), "Expires in 1 hour");

        let days = NutritionExpiryStatus {
            days_remaining: Some(4),
            ..NutritionExpiryStatus::unlimited()
        };
        assert_eq!(format_expiry_message(&days), "4 days remaining");
        assert_eq!(
            format_expiry_message(&NutritionExpiryStatus::unlimited()),
            "Unlimited access"
        );
    }
}
