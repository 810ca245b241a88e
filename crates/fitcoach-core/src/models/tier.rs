// ABOUTME: Subscription tier enum with parsing, display names and quota lookup
// ABOUTME: Freemium, Premium and Smart Premium gate quotas and nutrition expiry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::tiers;
use crate::errors::AppError;
use crate::models::quota::QuotaLimits;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Subscription level of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    /// Free tier with time-limited nutrition plans
    Freemium,
    /// Paid tier
    Premium,
    /// Top paid tier with unlimited messaging
    SmartPremium,
}

impl SubscriptionTier {
    /// All tiers, cheapest first
    pub const ALL: [Self; 3] = [Self::Freemium, Self::Premium, Self::SmartPremium];

    /// Convert to string for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Freemium => tiers::FREEMIUM,
            Self::Premium => tiers::PREMIUM,
            Self::SmartPremium => tiers::SMART_PREMIUM,
        }
    }

    /// Get display name for this tier
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Freemium => "Freemium",
            Self::Premium => "Premium",
            Self::SmartPremium => "Smart Premium",
        }
    }

    /// Whether this is a paid tier
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        !matches!(self, Self::Freemium)
    }

    /// Quota limits for this tier
    #[must_use]
    pub const fn limits(&self) -> QuotaLimits {
        QuotaLimits::for_tier(*self)
    }
}

impl Display for SubscriptionTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SubscriptionTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            tiers::FREEMIUM => Ok(Self::Freemium),
            tiers::PREMIUM => Ok(Self::Premium),
            tiers::SMART_PREMIUM => Ok(Self::SmartPremium),
            _ => Err(AppError::invalid_input(format!(
                "Invalid subscription tier: {s}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_display_and_storage_forms() {
        assert_eq!(
            "Smart Premium".parse::<SubscriptionTier>().unwrap(),
            SubscriptionTier::SmartPremium
        );
        assert_eq!(
            "smart_premium".parse::<SubscriptionTier>().unwrap(),
            SubscriptionTier::SmartPremium
        );
        assert_eq!(
            "Freemium".parse::<SubscriptionTier>().unwrap(),
            SubscriptionTier::Freemium
        );
        assert!("gold".parse::<SubscriptionTier>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for tier in SubscriptionTier::ALL {
            assert_eq!(tier.to_string().parse::<SubscriptionTier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_only_freemium_is_unpaid() {
        assert!(!SubscriptionTier::Freemium.is_paid());
        assert!(SubscriptionTier::Premium.is_paid());
        assert!(SubscriptionTier::SmartPremium.is_paid());
    }
}
