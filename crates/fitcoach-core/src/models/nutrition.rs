// ABOUTME: Nutrition plan access models: generated plans and their expiry status
// ABOUTME: Freemium plans carry an expiry instant, paid plans persist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrition::EXPIRING_SOON_DAYS;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated nutrition plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Plan identifier
    pub id: Uuid,
    /// When the plan was generated
    pub generated_at: DateTime<Utc>,
    /// End of the validity window, `None` when the plan persists
    pub expires_at: Option<DateTime<Utc>>,
    /// Whether access has been locked
    pub is_locked: bool,
}

/// Display classification of a plan's remaining validity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryPhase {
    /// Plenty of time left, or the plan never expires
    Active,
    /// Few days left
    ExpiringSoon,
    /// Past its window; locked until upgrade or regeneration
    Expired,
}

/// Remaining validity of a nutrition plan at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionExpiryStatus {
    /// Past the validity window
    pub is_expired: bool,
    /// Plan content is not accessible
    pub is_locked: bool,
    /// Whole days left, `None` when the plan persists or has expired
    pub days_remaining: Option<i64>,
    /// Whole hours left, reported only when less than a day remains
    pub hours_remaining: Option<i64>,
}

impl NutritionExpiryStatus {
    /// Status of a plan that never expires
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            is_expired: false,
            is_locked: false,
            days_remaining: None,
            hours_remaining: None,
        }
    }

    /// Status of a plan past its window
    #[must_use]
    pub const fn expired() -> Self {
        Self {
            is_expired: true,
            is_locked: true,
            days_remaining: None,
            hours_remaining: None,
        }
    }

    /// Status when no plan has been generated yet
    #[must_use]
    pub const fn no_plan() -> Self {
        Self {
            is_expired: false,
            is_locked: true,
            days_remaining: None,
            hours_remaining: None,
        }
    }

    /// Whether the user may open the plan
    #[must_use]
    pub const fn can_access(&self) -> bool {
        !self.is_locked
    }

    /// Display classification
    #[must_use]
    pub fn phase(&self) -> ExpiryPhase {
        if self.is_expired || self.is_locked {
            return ExpiryPhase::Expired;
        }
        match self.days_remaining {
            Some(days) if days <= EXPIRING_SOON_DAYS => ExpiryPhase::ExpiringSoon,
            _ => ExpiryPhase::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_classification() {
        assert_eq!(NutritionExpiryStatus::unlimited().phase(), ExpiryPhase::Active);
        assert_eq!(NutritionExpiryStatus::expired().phase(), ExpiryPhase::Expired);
        assert_eq!(NutritionExpiryStatus::no_plan().phase(), ExpiryPhase::Expired);

        let soon = NutritionExpiryStatus {
            days_remaining: Some(2),
            ..NutritionExpiryStatus::unlimited()
        };
        assert_eq!(soon.phase(), ExpiryPhase::ExpiringSoon);

        let later = NutritionExpiryStatus {
            days_remaining: Some(3),
            ..NutritionExpiryStatus::unlimited()
        };
        assert_eq!(later.phase(), ExpiryPhase::Active);
    }

    #[test]
    fn test_access_follows_lock() {
        assert!(NutritionExpiryStatus::unlimited().can_access());
        assert!(!NutritionExpiryStatus::expired().can_access());
        assert!(!NutritionExpiryStatus::no_plan().can_access());
    }
}
